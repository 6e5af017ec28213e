//! Tokens of the surface syntax and their precedence.
//!
//! | Token          | Characters  |
//! |----------------|-------------|
//! | `Not`          | `!`         |
//! | `And`          | `&`         |
//! | `Or`           | `\|`        |
//! | `Imply`        | `>` or `^`  |
//! | `Iff`          | `=` or `~`  |
//! | `LeftBracket`  | `(`         |
//! | `RightBracket` | `)`         |
//! | `Var`          | `A-Z`, `a-z`|

use crate::ast::{BinaryOp, UnaryOp};
use crate::types::Var;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Not,
    And,
    Or,
    Imply,
    Iff,
    LeftBracket,
    RightBracket,
    Var(Var),
    /// Virtual end-of-input token. Never part of a parsed token stream.
    End,
}

impl Token {
    /// Maps a single character to its token, or `None` if the character is not
    /// part of the syntax. Whitespace is not a token either.
    pub fn classify(c: char) -> Option<Token> {
        let token = match c {
            '!' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '>' | '^' => Token::Imply,
            '=' | '~' => Token::Iff,
            '(' => Token::LeftBracket,
            ')' => Token::RightBracket,
            _ => Token::Var(Var::from_letter(c)?),
        };
        Some(token)
    }

    /// Binding level used by the shunting-yard pop decisions.
    ///
    /// Lower binds tighter. `(` sits above every operator so that only `)` and
    /// `End` can reach it.
    pub fn precedence(self) -> u8 {
        match self {
            Token::Not => 0,
            Token::And => 1,
            Token::Or => 2,
            Token::Imply => 3,
            Token::Iff => 4,
            Token::LeftBracket | Token::RightBracket | Token::End => 5,
            Token::Var(_) => 0,
        }
    }

    /// Right-associative tokens only pop strictly tighter entries.
    ///
    /// `)` is right-associative so that its pop phase stops at the matching `(`;
    /// `End` is not, so it drains the whole stack.
    pub fn is_right_assoc(self) -> bool {
        matches!(self, Token::Not | Token::RightBracket)
    }

    /// Number of operands consumed when this token is popped from the operator stack.
    pub fn arity(self) -> usize {
        match self {
            Token::Not => 1,
            Token::And | Token::Or | Token::Imply | Token::Iff => 2,
            _ => 0,
        }
    }

    /// Returns true if an entry with token `top` must be popped before `self` is pushed.
    pub fn pops(self, top: Token) -> bool {
        let bias = if self.is_right_assoc() { 0 } else { 1 };
        top.precedence() < self.precedence() + bias
    }

    pub fn as_unary(self) -> Option<UnaryOp> {
        match self {
            Token::Not => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn as_binary(self) -> Option<BinaryOp> {
        match self {
            Token::And => Some(BinaryOp::And),
            Token::Or => Some(BinaryOp::Or),
            Token::Imply => Some(BinaryOp::Imply),
            Token::Iff => Some(BinaryOp::Iff),
            _ => None,
        }
    }
}
