//! Core calculator state machine.
//!
//! This module contains the state that a presentation layer drives:
//! - The `Calculator` machine and its input events
//! - Bounded computation `History` with FIFO eviction
//! - Full-state `Snapshot` values backing undo/redo
//!
//! The machine is single-owner and synchronous: every operation runs to
//! completion, and observers are pull-based.

mod history;
mod machine;
mod snapshot;

pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use machine::Calculator;
pub use snapshot::Snapshot;
