//! This crate is part of [Quill],
//! an [N3] and [RDF] toolkit in Rust.
//!
//! It provides the resolution of relative references against a base IRI,
//! with the special cases that N3 documents rely on
//! (bare `scheme:` bases, the `"."` directory shortcut, `file:` canonicalization),
//! as well as the relativization of IRIs against a base.
//!
//! [Quill]: https://docs.rs/quill_n3/latest/quill_n3/
//! [N3]: https://www.w3.org/TeamSubmission/n3/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

mod _error;
pub use _error::*;
pub mod file;
pub mod relativize;
pub mod resolve;
pub use resolve::{resolve, Resolver};
