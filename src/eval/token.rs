//! Lexical tokens for the expression language.

/// Binary operators, in display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*` (also `×`)
    Mul,
    /// `/` (also `÷`)
    Div,
    /// `%`
    Rem,
    /// `**` (also `^`)
    Pow,
}

impl Op {
    /// Binding power of the operator. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div | Op::Rem => 2,
            Op::Pow => 4,
        }
    }

    /// Exponentiation associates to the right, everything else to the left.
    pub fn is_right_associative(self) -> bool {
        matches!(self, Op::Pow)
    }
}

/// A single lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// A binary operator (or unary sign, disambiguated by the parser)
    Op(Op),
    /// `(`
    LParen,
    /// `)`
    RParen,
}
