//! Expression AST: parsing from tokens and interpretation.

use super::error::EvalError;
use super::token::{Op, Token};

// Unary sign binds tighter than multiplication but looser than
// exponentiation, so -2**2 is -(2**2).
const UNARY_PRECEDENCE: u8 = 3;

/// Ast nodes for the expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A constant value
    Value(f64),
    /// Unary negation
    Neg(Box<Ast>),
    /// <left> + <right>
    Add(Box<Ast>, Box<Ast>),
    /// <left> - <right>
    Sub(Box<Ast>, Box<Ast>),
    /// <left> * <right>
    Mul(Box<Ast>, Box<Ast>),
    /// <left> / <right>
    Div(Box<Ast>, Box<Ast>),
    /// <left> % <right>
    Rem(Box<Ast>, Box<Ast>),
    /// <left> ** <right>
    Pow(Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Parse a token stream into an AST.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, EvalError> {
        let mut parser = Parser { tokens, pos: 0 };
        let ast = parser.expression(0)?;
        match parser.peek() {
            None => Ok(ast),
            Some(token) => Err(EvalError::Parse(format!(
                "unexpected {token:?} after expression"
            ))),
        }
    }

    /// Evaluate the expression.
    pub fn value(&self) -> Result<f64, EvalError> {
        match self {
            Ast::Value(value) => Ok(*value),
            Ast::Neg(inner) => Ok(-inner.value()?),
            Ast::Add(left, right) => Ok(left.value()? + right.value()?),
            Ast::Sub(left, right) => Ok(left.value()? - right.value()?),
            Ast::Mul(left, right) => Ok(left.value()? * right.value()?),
            Ast::Div(left, right) => {
                let divisor = right.value()?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left.value()? / divisor)
            }
            Ast::Rem(left, right) => {
                let divisor = right.value()?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left.value()? % divisor)
            }
            Ast::Pow(left, right) => Ok(left.value()?.powf(right.value()?)),
        }
    }
}

/// Precedence-climbing parser over a lexed token slice.
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self, min_precedence: u8) -> Result<Ast, EvalError> {
        let mut left = self.prefix()?;

        while let Some(Token::Op(op)) = self.peek() {
            if op.precedence() < min_precedence {
                break;
            }
            self.pos += 1;

            let next_min = if op.is_right_associative() {
                op.precedence()
            } else {
                op.precedence() + 1
            };
            let right = Box::new(self.expression(next_min)?);
            let left_box = Box::new(left);
            left = match op {
                Op::Add => Ast::Add(left_box, right),
                Op::Sub => Ast::Sub(left_box, right),
                Op::Mul => Ast::Mul(left_box, right),
                Op::Div => Ast::Div(left_box, right),
                Op::Rem => Ast::Rem(left_box, right),
                Op::Pow => Ast::Pow(left_box, right),
            };
        }

        Ok(left)
    }

    fn prefix(&mut self) -> Result<Ast, EvalError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Ast::Value(value)),
            Some(Token::Op(Op::Sub)) => {
                let inner = self.expression(UNARY_PRECEDENCE)?;
                Ok(Ast::Neg(Box::new(inner)))
            }
            Some(Token::Op(Op::Add)) => self.expression(UNARY_PRECEDENCE),
            Some(Token::LParen) => {
                let inner = self.expression(0)?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(EvalError::Parse("mismatched parenthesis".into())),
                }
            }
            Some(token) => Err(EvalError::Parse(format!("unexpected {token:?}"))),
            None => Err(EvalError::Parse("unexpected end of expression".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::lexer::Lexer;

    fn parse(input: &str) -> Result<Ast, EvalError> {
        Ast::from_tokens(&Lexer::new(input).tokenize()?)
    }

    fn value_of(input: &str) -> Result<f64, EvalError> {
        parse(input)?.value()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(value_of("2+3*4"), Ok(14.0));
        assert_eq!(value_of("3*4+2"), Ok(14.0));
    }

    #[test]
    fn same_precedence_associates_left() {
        assert_eq!(value_of("10-3-2"), Ok(5.0));
        assert_eq!(value_of("24/4/2"), Ok(3.0));
    }

    #[test]
    fn pow_associates_right() {
        assert_eq!(value_of("2**3**2"), Ok(512.0));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(value_of("(2+3)*4"), Ok(20.0));
    }

    #[test]
    fn unary_sign_is_parsed() {
        assert_eq!(value_of("-5"), Ok(-5.0));
        assert_eq!(value_of("+5"), Ok(5.0));
        assert_eq!(value_of("-2*3"), Ok(-6.0));
        assert_eq!(value_of("2*-3"), Ok(-6.0));
    }

    #[test]
    fn unary_minus_binds_looser_than_pow() {
        assert_eq!(value_of("-2**2"), Ok(-4.0));
        assert_eq!(value_of("2**-1"), Ok(0.5));
    }

    #[test]
    fn remainder_keeps_dividend_sign() {
        assert_eq!(value_of("10%3"), Ok(1.0));
        assert_eq!(value_of("-10%3"), Ok(-1.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(value_of("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(value_of("5%0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn trailing_operator_is_a_parse_error() {
        assert!(matches!(value_of("5+"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn unbalanced_parentheses_are_parse_errors() {
        assert!(matches!(value_of("(1+2"), Err(EvalError::Parse(_))));
        assert!(matches!(value_of("1+2)"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(matches!(value_of(""), Err(EvalError::Parse(_))));
    }

    #[test]
    fn adjacent_values_are_a_parse_error() {
        assert!(matches!(value_of("1 2"), Err(EvalError::Parse(_))));
    }
}
