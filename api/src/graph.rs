//! An RDF graph, the central concept of RDF, is a set of triples.
//!
//! This module provides the [`Graph`] trait, through which serializers read graphs,
//! and the [`MutableGraph`] trait, through which parsers populate them.
//! Both are implemented by [standard collections of triples](#foreign-impls)
//! and by the stores of `quill_inmem`.

mod _traits;
pub use _traits::*;
mod _foreign_impl;
