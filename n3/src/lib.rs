//! This crate is part of [Quill],
//! an [N3] and [RDF] toolkit in Rust.
//!
//! It reads and writes the subset of N3 that describes plain RDF graphs.
//!
//! Reading N3 is done in three stages:
//! the [`lexer`] turns the text into tokens,
//! the [`parser`] turns tokens into [events](parser::Event),
//! and the [`materializer`] turns events into the triples of any
//! [`MutableGraph`].
//! Writing N3 is done by the [`serializer`],
//! which lays out a whole [`Graph`] in columns, with lists and nested blank nodes.
//!
//! The functions below chain these stages with their default configuration:
//!
//! ```
//! # fn main() -> Result<(), quill_n3::Error> {
//! use quill_inmem::LightGraph;
//! use quill_n3::serializer::N3Config;
//!
//! let mut graph = LightGraph::new();
//! let n = quill_n3::parse_str(
//!     "@prefix : <http://example.org/> .\n:alice :knows [ :name \"Bob\" ] .",
//!     &mut graph,
//! )?;
//! assert_eq!(n, 2);
//! let text = quill_n3::serialize_to_string(&graph, N3Config::new())?;
//! assert!(text.ends_with(":alice  :knows [ :name \"Bob\" ] .\n"));
//! # Ok(())
//! # }
//! ```
//!
//! [Quill]: https://docs.rs/quill_n3/latest/quill_n3/
//! [N3]: https://www.w3.org/TeamSubmission/n3/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

pub mod lexer;
pub mod materializer;
pub mod parser;
pub mod serializer;

mod _error;
pub use _error::*;

use materializer::{Materializer, MaterializerConfig};
use parser::Parser;
use quill_api::graph::{Graph, MutableGraph};
use quill_api::source::StreamError::{SinkError, SourceError};
use serializer::{N3Config, N3Serializer};
use std::io::BufRead;

/// Parse `text` into `graph`, with no base IRI.
///
/// Return the number of triples actually added to `graph`.
pub fn parse_str<G>(text: &str, graph: &mut G) -> Result<usize, Error>
where
    G: MutableGraph + ?Sized,
    G::MutationError: Send + Sync,
{
    parse_str_with_config(text, graph, MaterializerConfig::default())
}

/// Parse `text` into `graph`.
///
/// Return the number of triples actually added to `graph`.
/// Parsing stops at the first error,
/// but the triples materialized before it are kept in `graph`.
pub fn parse_str_with_config<G>(
    text: &str,
    graph: &mut G,
    config: MaterializerConfig,
) -> Result<usize, Error>
where
    G: MutableGraph + ?Sized,
    G::MutationError: Send + Sync,
{
    let mut materializer = Materializer::new_with_config(graph, config);
    Parser::new(text)
        .parse(&mut materializer)
        .map_err(|err| match err {
            SourceError(err) => Error::Parse(err),
            SinkError(err) => Error::Materialize(err),
        })?;
    Ok(materializer.triple_count())
}

/// Parse the whole content of `read` into `graph`.
///
/// The content must be UTF-8.
/// Return the number of triples actually added to `graph`.
pub fn parse_bufread<R, G>(
    mut read: R,
    graph: &mut G,
    config: MaterializerConfig,
) -> Result<usize, Error>
where
    R: BufRead,
    G: MutableGraph + ?Sized,
    G::MutationError: Send + Sync,
{
    let mut text = String::new();
    read.read_to_string(&mut text)?;
    parse_str_with_config(&text, graph, config)
}

/// Write `graph` as an N3 document.
pub fn serialize_to_string<G>(graph: &G, config: N3Config) -> Result<String, Error>
where
    G: Graph + ?Sized,
    G::Error: Send + Sync,
{
    let mut ser = N3Serializer::new_stringifier_with_config(config);
    ser.serialize_graph(graph).map_err(|err| match err {
        SourceError(err) => Error::Graph(Box::new(err)),
        SinkError(err) => Error::Io(err),
    })?;
    Ok(ser.as_str().to_string())
}


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
