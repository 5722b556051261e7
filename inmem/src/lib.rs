//! This crate is part of [Quill],
//! an [N3] and [RDF] toolkit in Rust.
//!
//! It provides an in-memory implementation of graphs,
//! used by the parsers of `quill_n3` by default.
//!
//! [Quill]: https://docs.rs/quill_n3/latest/quill_n3/
//! [N3]: https://www.w3.org/TeamSubmission/n3/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

pub mod graph;
pub mod index;

pub use graph::LightGraph;
