//! Arithmetic expression evaluation.
//!
//! A small, explicit expression language over `f64`: numeric literals,
//! `+ - * / %` and `**` (with `^`, `×`, `÷` accepted as display aliases),
//! unary sign, and parentheses. Exponentiation binds tightest and
//! associates to the right; everything else is left-associative with the
//! usual precedence.
//!
//! The evaluator is a lexer plus a precedence-climbing parser plus an AST
//! interpreter. Arbitrary input can be fed to it safely: it never executes
//! anything, and malformed input yields [`EvalError`] instead of panicking.
//!
//! The easiest way to use this module is the [`eval`] function:
//!
//! ```rust
//! assert_eq!(reckon::eval("3 + 5 * 2"), Ok(13.0));
//! ```
//!
//! Parsing can be separated from evaluation with [`Expr`]:
//!
//! ```rust
//! use reckon::Expr;
//!
//! let expr = Expr::parse("(2+3)*4").unwrap();
//! assert_eq!(expr.value(), Ok(20.0));
//! ```

mod ast;
mod error;
mod lexer;
mod token;

pub use ast::Ast;
pub use error::EvalError;

use lexer::Lexer;

/// A parsed expression, reusable for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse an expression from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Parse`] when the input is not a well-formed
    /// expression.
    pub fn parse(input: &str) -> Result<Self, EvalError> {
        let tokens = Lexer::new(input).tokenize()?;
        let ast = Ast::from_tokens(&tokens)?;
        Ok(Self { ast })
    }

    /// Evaluate the parsed expression.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when a `/` or `%` right
    /// operand evaluates to zero.
    pub fn value(&self) -> Result<f64, EvalError> {
        self.ast.value()
    }
}

/// Parse and evaluate an expression in one step.
///
/// # Example
///
/// ```rust
/// use reckon::{eval, EvalError};
///
/// assert_eq!(eval("2**10"), Ok(1024.0));
/// assert_eq!(eval("3×4÷2"), Ok(6.0));
/// assert_eq!(eval("5/0"), Err(EvalError::DivisionByZero));
/// assert!(matches!(eval("5+"), Err(EvalError::Parse(_))));
/// ```
pub fn eval(input: &str) -> Result<f64, EvalError> {
    Expr::parse(input)?.value()
}
