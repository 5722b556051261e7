// this module is transparently re-exported by its parent `parser`
use crate::lexer::{LexError, Token};

/// Parsing error, capturing the position in the input where the error was encountered.
///
/// Its [`Display`](std::fmt::Display) starts with `<line>:<col>` (both starting at 1).
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// No token could be recognized
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A token was recognized, but the grammar does not allow it here
    #[error("{line}:{col} unexpected {found}, expected {expected}")]
    Unexpected {
        /// The offending token, as written in the input
        found: String,
        /// What the parser was expecting instead
        expected: String,
        /// Line of the offending token
        line: usize,
        /// Column of the offending token
        col: usize,
    },
}

impl ParseError {
    pub(crate) fn unexpected(token: &Token, expected: &str) -> Self {
        ParseError::Unexpected {
            found: token.to_string(),
            expected: expected.to_string(),
            line: token.line,
            col: token.col,
        }
    }

    /// Return the position in the input, as `(line, col)` (both starting at 1).
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Lex(err) => err.position(),
            ParseError::Unexpected { line, col, .. } => (*line, *col),
        }
    }

    /// Display this error with context (typically a file name).
    pub fn in_context(&self, context: &str) -> String {
        format!("{context}:{self}")
    }
}
