// this module is transparently re-exported by its parent `lib`
use crate::materializer::MaterializeError;
use crate::parser::ParseError;
use std::io;

/// Error raised by the convenience functions of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing failed
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The text is not valid N3
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The text is valid N3, but can not be turned into RDF triples
    #[error(transparent)]
    Materialize(#[from] MaterializeError),
    /// The graph failed while being read
    #[error("graph error: {0}")]
    Graph(Box<dyn std::error::Error + Send + Sync>),
}
