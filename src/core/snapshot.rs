//! Full-state snapshots backing undo/redo.

use super::history::History;
use serde::{Deserialize, Serialize};

/// An immutable copy of the calculator's observable state.
///
/// A snapshot is taken before every mutating operation and pushed onto the
/// undo stack; undo and redo restore the machine from these values. Because
/// [`History`] records are value copies, a stored snapshot is unaffected by
/// anything the live machine does afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Input buffer at the time of capture
    pub input: String,
    /// Result string at the time of capture
    pub result: String,
    /// History at the time of capture
    pub history: History,
}
