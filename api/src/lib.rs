//! This crate is part of [Quill],
//! an [N3] and [RDF] toolkit in Rust.
//!
//! It defines the model shared by the other crates:
//! * [terms](term) and [triples](triple),
//! * [namespaces](ns) and [prefix maps](prefix),
//! * the [`Graph`](graph::Graph) and [`MutableGraph`](graph::MutableGraph) traits,
//!   which parsers write into and serializers read from,
//! * [stream errors](source), distinguishing the side of a pipeline that failed.
//!
//! [Quill]: https://docs.rs/quill_n3/latest/quill_n3/
//! [N3]: https://www.w3.org/TeamSubmission/n3/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

pub mod graph;
pub mod ns;
pub mod prefix;
pub mod source;
pub mod term;
pub mod triple;

/// Re-export of the traits and types most commonly needed by users of this crate.
pub mod prelude {
    pub use crate::graph::{Graph, MutableGraph};
    pub use crate::prefix::PrefixMap;
    pub use crate::term::{BnodeId, Literal, Term};
    pub use crate::triple::{Triple, TripleExt};
}
