// this module is transparently re-exported by its parent `materializer`
use quill_iri::UriError;
use std::error::Error;

/// Error raised by the [`Materializer`](super::Materializer),
/// carrying the line of the offending event.
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    /// A prefixed name uses a prefix that was never declared
    #[error("line {line}: undefined prefix '{prefix}:'")]
    UndefinedPrefix {
        /// Line of the offending statement
        line: usize,
        /// The undefined prefix
        prefix: String,
    },
    /// A literal has a datatype that is not an IRI
    #[error("line {line}: {node} can not be used as a datatype")]
    IllegalDatatype {
        /// Line of the offending statement
        line: usize,
        /// The offending datatype
        node: String,
    },
    /// Formulas have no counterpart in RDF graphs
    #[error("line {line}: formulas are not supported")]
    Formula {
        /// Line of the offending event
        line: usize,
    },
    /// A statement has a literal as its subject
    #[error("line {line}: literal {node} can not be a subject")]
    LiteralSubject {
        /// Line of the offending statement
        line: usize,
        /// The offending literal
        node: String,
    },
    /// A statement has a predicate that is neither an IRI nor an operator
    #[error("line {line}: {node} can not be a predicate")]
    BadPredicate {
        /// Line of the offending statement
        line: usize,
        /// The offending predicate
        node: String,
    },
    /// A node or a directive is malformed
    #[error("line {line}: {message}")]
    BadNode {
        /// Line of the offending event
        line: usize,
        /// What is wrong
        message: String,
    },
    /// Variables and `this` have no counterpart in RDF graphs
    #[error("line {line}: {node} is not supported")]
    Unsupported {
        /// Line of the offending statement
        line: usize,
        /// The offending node
        node: String,
    },
    /// An IRI reference could not be resolved
    #[error("line {line}: {source}")]
    Iri {
        /// Line of the offending event
        line: usize,
        /// The resolution error
        source: UriError,
    },
    /// The target graph failed
    #[error("line {line}: graph error: {source}")]
    Graph {
        /// Line of the offending event
        line: usize,
        /// The graph error
        source: Box<dyn Error + Send + Sync>,
    },
}

impl MaterializeError {
    /// The line of the offending event.
    pub fn line(&self) -> usize {
        match self {
            MaterializeError::UndefinedPrefix { line, .. }
            | MaterializeError::IllegalDatatype { line, .. }
            | MaterializeError::Formula { line }
            | MaterializeError::LiteralSubject { line, .. }
            | MaterializeError::BadPredicate { line, .. }
            | MaterializeError::BadNode { line, .. }
            | MaterializeError::Unsupported { line, .. }
            | MaterializeError::Iri { line, .. }
            | MaterializeError::Graph { line, .. } => *line,
        }
    }

    pub(crate) fn graph<E>(line: usize, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        MaterializeError::Graph {
            line,
            source: Box::new(source),
        }
    }
}
