//! The calculator state machine.

use super::history::{History, HistoryEntry};
use super::snapshot::Snapshot;
use crate::eval;
use crate::functions::{self, Evaluation, FunctionError, TrigFunction};
use serde::{Deserialize, Serialize};

/// Operators that are collapsed when entered back-to-back.
const OPERATORS: [char; 5] = ['+', '-', '*', '/', '%'];

/// Result string shown when an expression fails to evaluate.
const ERROR_RESULT: &str = "Error";

/// The calculator state machine.
///
/// Owns all mutable calculator state: the input buffer being built, the
/// last result, a bounded [`History`], and undo/redo stacks of
/// [`Snapshot`]s. External input handlers call the mutating operations;
/// a renderer reads state back through the pull-based observers
/// ([`input`](Self::input), [`result`](Self::result),
/// [`history`](Self::history)).
///
/// Every mutating operation first pushes a snapshot onto the undo stack
/// and clears the redo stack, so the machine never has a branching redo
/// future after a fresh forward action.
///
/// # Example
///
/// ```rust
/// use reckon::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.append("7");
/// calc.append("*");
/// calc.append("6");
/// calc.evaluate();
/// assert_eq!(calc.result(), "42");
///
/// calc.undo();
/// assert_eq!(calc.result(), "");
/// calc.redo();
/// assert_eq!(calc.result(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    input: String,
    result: String,
    history: History,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            input: "0".to_string(),
            result: String::new(),
            history: History::new(),
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }
}

impl Calculator {
    /// Create a calculator in its initial state: input `"0"`, no result,
    /// empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key's value to the input buffer.
    ///
    /// A leading `"0"` is replaced by anything except a decimal point, and
    /// an operator entered directly after another operator replaces it
    /// instead of chaining. Only the single trailing character is
    /// inspected; the operator set is `+ - * / %`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.append("5");
    /// assert_eq!(calc.input(), "5"); // not "05"
    ///
    /// calc.append("+");
    /// calc.append("*");
    /// assert_eq!(calc.input(), "5*"); // "*" replaced the "+"
    /// ```
    pub fn append(&mut self, value: &str) {
        self.save_state();

        if self.input == "0" && value != "." {
            self.input = value.to_string();
        } else if is_operator(value) && self.input.ends_with(|c: char| OPERATORS.contains(&c)) {
            self.input.pop();
            self.input.push_str(value);
        } else {
            self.input.push_str(value);
        }
    }

    /// Evaluate the input buffer as an arithmetic expression.
    ///
    /// Display-only symbols are normalized first (`×` to `*`, `÷` to `/`,
    /// `^` to `**`). On success the result is the stringified value and an
    /// entry is pushed to history. On any evaluation error the result
    /// becomes `"Error"`; the input buffer and history are left untouched
    /// so the user can correct the expression. Malformed input never
    /// panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.append("2");
    /// calc.append("^");
    /// calc.append("10");
    /// calc.evaluate();
    /// assert_eq!(calc.result(), "1024");
    /// ```
    pub fn evaluate(&mut self) {
        self.save_state();

        let expression = self
            .input
            .replace('×', "*")
            .replace('÷', "/")
            .replace('^', "**");

        match eval::eval(&expression) {
            Ok(value) => {
                self.result = value.to_string();
                self.history = self
                    .history
                    .record(HistoryEntry::new(self.input.clone(), self.result.clone()));
            }
            Err(_) => {
                self.result = ERROR_RESULT.to_string();
            }
        }
    }

    /// Apply a trigonometric function to an angle in degrees.
    ///
    /// On validation failure ([`FunctionError`]) the machine is left
    /// exactly as it was. On success the input buffer becomes the display
    /// form (`sin(90)`), the result the stringified value, and an entry is
    /// pushed to history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{Calculator, TrigFunction};
    ///
    /// let mut calc = Calculator::new();
    /// calc.apply_trig(TrigFunction::Sin, 90.0).unwrap();
    /// assert_eq!(calc.input(), "sin(90)");
    /// assert_eq!(calc.result(), "1");
    /// ```
    pub fn apply_trig(&mut self, function: TrigFunction, degrees: f64) -> Result<(), FunctionError> {
        let outcome = functions::trig(function, degrees)?;
        self.commit(outcome);
        Ok(())
    }

    /// Apply a logarithm of the given base.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.apply_log(10.0, 100.0).unwrap();
    /// assert_eq!(calc.input(), "log10(100)");
    /// assert_eq!(calc.result(), "2");
    /// ```
    pub fn apply_log(&mut self, base: f64, number: f64) -> Result<(), FunctionError> {
        let outcome = functions::log(base, number)?;
        self.commit(outcome);
        Ok(())
    }

    /// Apply an nth root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.apply_root(2.0, 9.0).unwrap();
    /// assert_eq!(calc.input(), "2√(9)");
    /// assert_eq!(calc.result(), "3");
    /// ```
    pub fn apply_root(&mut self, degree: f64, number: f64) -> Result<(), FunctionError> {
        let outcome = functions::root(degree, number)?;
        self.commit(outcome);
        Ok(())
    }

    /// Reset the input buffer to `"0"` and clear the result.
    ///
    /// History is untouched; the reset itself is undoable.
    pub fn clear(&mut self) {
        self.save_state();
        self.input = "0".to_string();
        self.result.clear();
    }

    /// Undo the most recent operation.
    ///
    /// Restores the exact `(input, result, history)` triple from before
    /// it. Returns `false` (and does nothing) when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop() else {
            return false;
        };
        self.redo.push(self.snapshot());
        self.restore(previous);
        true
    }

    /// Redo the most recently undone operation.
    ///
    /// Symmetric to [`undo`](Self::undo). Returns `false` when the redo
    /// stack is empty - in particular after any fresh mutating operation,
    /// which discards the redo future.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push(self.snapshot());
        self.restore(next);
        true
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last computed result, `""` before any computation, `"Error"` after
    /// a failed evaluation.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Read-only view of the computation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Check whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Check whether a redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Snapshot the state and push the undo record for a fresh forward
    /// action, discarding any redo future.
    fn save_state(&mut self) {
        self.undo.push(self.snapshot());
        self.redo.clear();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.input.clone(),
            result: self.result.clone(),
            history: self.history.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.input = snapshot.input;
        self.result = snapshot.result;
        self.history = snapshot.history;
    }

    /// Commit a validated function outcome: snapshot, overwrite input and
    /// result with the canonical display pair, push to history.
    fn commit(&mut self, outcome: Evaluation) {
        self.save_state();
        self.input = outcome.display;
        self.result = outcome.value.to_string();
        self.history = self
            .history
            .record(HistoryEntry::new(self.input.clone(), self.result.clone()));
    }
}

fn is_operator(value: &str) -> bool {
    matches!(value, "+" | "-" | "*" | "/" | "%")
}
