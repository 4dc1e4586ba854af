//! Lexer for the expression language.

use super::error::EvalError;
use super::token::{Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Lex the whole input into a token stream.
    pub fn tokenize(mut self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, EvalError> {
        let Some(c) = self.input.next() else {
            return Ok(None);
        };
        let token = match c {
            ' ' | '\t' | '\n' | '\r' => return self.next_token(),
            c if c.is_ascii_digit() || c == '.' => self.number(c)?,
            '+' => Token::Op(Op::Add),
            '-' => Token::Op(Op::Sub),
            '*' => {
                // "**" is the exponentiation operator
                if self.input.peek() == Some(&'*') {
                    self.input.next();
                    Token::Op(Op::Pow)
                } else {
                    Token::Op(Op::Mul)
                }
            }
            '×' => Token::Op(Op::Mul),
            '/' | '÷' => Token::Op(Op::Div),
            '%' => Token::Op(Op::Rem),
            '^' => Token::Op(Op::Pow),
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(EvalError::Parse(format!(
                    "unexpected character in input: {other}"
                )));
            }
        };
        Ok(Some(token))
    }

    fn number(&mut self, first: char) -> Result<Token, EvalError> {
        let mut literal = String::new();
        literal.push(first);
        while let Some(&c) = self.input.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.input.next();
                literal.push(c);
            } else {
                break;
            }
        }
        let value = literal
            .parse()
            .map_err(|_| EvalError::Parse(format!("invalid number {literal}")))?;
        Ok(Token::Number(value))
    }
}
