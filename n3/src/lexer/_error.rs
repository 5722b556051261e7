// this module is transparently re-exported by its parent `lexer`

/// This error is raised when no token can be recognized at some point of the input.
///
/// It is also used for an unterminated string,
/// in which case `ch` is the opening quote.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum LexError {
    /// No token starts with `ch` at this position.
    #[error("{line}:{col} no viable token starting with {ch:?}")]
    NoViableToken {
        /// The offending character
        ch: char,
        /// Line of the offending character (starting at 1)
        line: usize,
        /// Column of the offending character (starting at 1)
        col: usize,
    },
}

impl LexError {
    /// Return the position in the input, as `(line, col)` (both starting at 1).
    pub fn position(&self) -> (usize, usize) {
        match self {
            LexError::NoViableToken { line, col, .. } => (*line, *col),
        }
    }
}
