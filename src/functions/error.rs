//! Validation errors for scientific functions.

use thiserror::Error;

/// Errors raised when a scientific function's argument is outside its
/// domain. The calculator reports these to the caller without mutating any
/// state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// An argument was NaN or infinite
    #[error("{argument} must be a finite number, got {value}")]
    NonFinite {
        argument: &'static str,
        value: f64,
    },

    /// Log base must be positive and not 1
    #[error("log base must be positive and not 1, got {base}")]
    InvalidLogBase { base: f64 },

    /// Log argument must be positive
    #[error("log argument must be positive, got {number}")]
    NonPositiveLogArgument { number: f64 },

    /// A 0th root is undefined
    #[error("root degree must not be zero")]
    ZeroRootDegree,

    /// Even roots of negative numbers have no real value
    #[error("even root of a negative number is not a real number")]
    EvenRootOfNegative { degree: f64, number: f64 },
}
