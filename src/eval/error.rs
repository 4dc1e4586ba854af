//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating an arithmetic expression.
///
/// Malformed input is never fatal: any string fed to the evaluator either
/// produces a value or one of these errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input could not be parsed as an expression
    #[error("failed to parse expression: {0}")]
    Parse(String),

    /// Division or remainder with a zero right operand
    #[error("division by zero")]
    DivisionByZero,
}
