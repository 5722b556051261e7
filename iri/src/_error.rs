//! Error and result type for IRI resolution.

use thiserror::Error;

/// Type alias for `Result` with default error [`UriError`].
pub type Result<T, E = UriError> = std::result::Result<T, E>;

/// This error is raised when a relative reference can not be resolved.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UriError {
    /// A relative reference was given, but no base (or an empty one).
    #[error("Can not resolve a relative reference without a base IRI")]
    NullBase,
    /// The base has no hierarchical part to resolve against.
    #[error("Can not resolve <{relative}> against opaque base <{base}>")]
    Relative {
        /// The offending base
        base: String,
        /// The reference that was to be resolved
        relative: String,
    },
    /// The base or the reference is not syntactically valid.
    #[error("Invalid IRI <{iri}>: {message}")]
    Syntax {
        /// The offending text
        iri: String,
        /// What the IRI parser complained about
        message: String,
    },
}

impl UriError {
    pub(crate) fn syntax<E: std::fmt::Display>(iri: &str, err: E) -> Self {
        UriError::Syntax {
            iri: iri.to_string(),
            message: err.to_string(),
        }
    }
}
