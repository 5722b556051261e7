//! This crate is part of [Quill],
//! an [N3] and [RDF] toolkit in Rust.
//!
//! This crate provides a function to check if two graphs
//! are [isomorphic].
//!
//! [Quill]: https://docs.rs/quill_n3/latest/quill_n3/
//! [N3]: https://www.w3.org/TeamSubmission/n3/
//! [RDF]: https://www.w3.org/TR/rdf12-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf12-concepts/#graph-isomorphism
#![deny(missing_docs)]

mod graph;
mod hash;

pub use graph::isomorphic_graphs;

#[cfg(test)]
mod test;
