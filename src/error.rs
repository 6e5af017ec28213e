//! Errors reported while analysing an expression.
//!
//! Every error is fatal for the run and points at a zero-based character offset
//! into the input line.

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A character outside of the accepted alphabet.
    InvalidCharacter,
    /// No tokens at all.
    EmptyExpression,
    /// `(` directly after a variable, as in `A(B)`.
    UnexpectedOpeningBracket,
    /// `()` with nothing inside.
    IsolatedBracketPair,
    /// An operator without enough operands, as in `A &`.
    MissingOperand,
    /// `(` left open at the end of input.
    UnexpectedBracket,
    /// `)` without a matching `(`.
    UnbalancedBracket,
    /// Two operands without an operator between them, as in `A B`.
    RedundantOccurrence,
    /// The line exceeds [`MAX_EXPR_LEN`][crate::parser::MAX_EXPR_LEN] characters.
    TooLong,
    /// An allocation failed. Always reported at position 0.
    OutOfMemory,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidCharacter => "Invalid character",
            ErrorKind::EmptyExpression => "Empty expression",
            ErrorKind::UnexpectedOpeningBracket => "Unexpected opening bracket",
            ErrorKind::IsolatedBracketPair => "Isolated bracket pair",
            ErrorKind::MissingOperand => "Missing operand",
            ErrorKind::UnexpectedBracket => "Unexpected or unbalanced bracket",
            ErrorKind::UnbalancedBracket => "Unbalanced bracket",
            ErrorKind::RedundantOccurrence => "Redundant variable occurrence",
            ErrorKind::TooLong => "Expression too long",
            ErrorKind::OutOfMemory => "Insufficient memory",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Error {
    /// Zero-based character offset of the offending token.
    pub position: usize,
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Error { position, kind }
    }

    pub fn out_of_memory() -> Self {
        Error::new(ErrorKind::OutOfMemory, 0)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)
    }
}

impl std::error::Error for Error {}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::out_of_memory()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
