//! Reckon: a calculator state machine
//!
//! Reckon models a calculator as a single-owner state machine: an input
//! buffer being built one key at a time, the last computed result, a short
//! rolling history of completed computations, and undo/redo stacks of full
//! state snapshots. Expressions are evaluated by an explicit lexer and
//! parser over `f64` — no dynamic code evaluation is involved anywhere.
//!
//! # Core Concepts
//!
//! - **Calculator**: the state machine; every mutating operation snapshots
//!   the state first so it can be undone
//! - **History**: bounded record of completed computations, oldest evicted
//!   first
//! - **Evaluator**: a small arithmetic language (`+ - * / % **` plus
//!   parentheses) with explicit parse and division-by-zero errors
//!
//! # Example
//!
//! ```rust
//! use reckon::Calculator;
//!
//! let mut calc = Calculator::new();
//! for key in ["2", "+", "3", "*", "4"] {
//!     calc.append(key);
//! }
//! calc.evaluate();
//!
//! assert_eq!(calc.result(), "14");
//! assert_eq!(calc.history().latest().unwrap().to_string(), "2+3*4 = 14");
//!
//! // Every operation above is undoable.
//! calc.undo();
//! assert_eq!(calc.result(), "");
//! assert_eq!(calc.input(), "2+3*4");
//! ```

pub mod core;
pub mod date;
pub mod eval;
pub mod functions;

// Re-export commonly used types
pub use crate::core::{Calculator, History, HistoryEntry, Snapshot};
pub use crate::eval::{eval, EvalError, Expr};
pub use crate::functions::{FunctionError, TrigFunction};
