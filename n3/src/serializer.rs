//! Writer for N3.
//!
//! The writer works in two passes over a whole [`Graph`]:
//! it first finds the lists and the blank nodes that can be written inline,
//! then writes the subjects in the order given by [`Graph::subjects`],
//! with their properties aligned in columns.
//!
//! **Important**:
//! [`N3Serializer`] makes no effort to minimize the number of write operations.
//! Hence, in most cases, it should be passed a [`BufWriter`](std::io::BufWriter).

mod _analysis;
mod _indent;
pub use _indent::*;
mod _pretty;
#[cfg(test)]
mod test;

use quill_api::graph::Graph;
use quill_api::prefix::PrefixMap;
use quill_api::source::{
    StreamError::{SinkError, SourceError},
    StreamResult,
};
use quill_api::triple::Triple;
use std::io;

/// How much sugar the writer uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum N3Style {
    /// Properties grouped by subject, lists written as `( … )`,
    /// blank nodes referenced once written as `[ … ]`.
    #[default]
    Pretty,
    /// Properties grouped by subject, every blank node labelled.
    Plain,
    /// One `subject predicate object .` statement per line.
    Triples,
}

/// N3 writer configuration.
#[derive(Clone, Debug)]
pub struct N3Config {
    pub(crate) style: N3Style,
    pub(crate) base: Option<String>,
    pub(crate) relative_iris: bool,
    pub(crate) list_types: bool,
    pub(crate) prefix_map: PrefixMap,
    pub(crate) property_column: usize,
    pub(crate) wide_property_len: usize,
    pub(crate) indent_property: usize,
    pub(crate) min_gap: usize,
}

impl N3Config {
    /// Build a new default [`N3Config`].
    pub fn new() -> Self {
        N3Config {
            style: N3Style::default(),
            base: None,
            relative_iris: true,
            list_types: false,
            prefix_map: PrefixMap::new(),
            property_column: 8,
            wide_property_len: 20,
            indent_property: 6,
            min_gap: 1,
        }
    }

    /// How much sugar is used (defaults to [`N3Style::Pretty`]).
    pub fn style(&self) -> N3Style {
        self.style
    }

    /// The base IRI of the produced document, if any (defaults to none).
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Whether IRIs that can not be abbreviated with a prefix
    /// are written relative to [`base`](Self::base) when possible (defaults to `true`).
    pub fn relative_iris(&self) -> bool {
        self.relative_iris
    }

    /// Whether list cells must carry a `rdf:type rdf:List` triple
    /// to be written as `( … )` (defaults to `false`).
    ///
    /// The match is exact: when the flag is off, cells that do carry
    /// the type triple are written as plain blank nodes (`[ … ]` or
    /// labelled), and when it is on, untyped cells are.
    ///
    /// This should agree with the flag of the same name in
    /// [`MaterializerConfig`](crate::materializer::MaterializerConfig)
    /// for the output to be read back as the same graph.
    pub fn list_types(&self) -> bool {
        self.list_types
    }

    /// Prefixes to declare in addition to those of the graph (defaults to none).
    ///
    /// Well-known prefixes (`rdf:`, `rdfs:`, `xsd:`, `owl:`, `log:`) are added
    /// whenever the graph uses them.
    pub fn prefix_map(&self) -> &PrefixMap {
        &self.prefix_map
    }

    /// The column of predicates, relative to the subject (defaults to 8).
    pub fn property_column(&self) -> usize {
        self.property_column
    }

    /// Predicates longer than this have their objects on the next line (defaults to 20).
    pub fn wide_property_len(&self) -> usize {
        self.wide_property_len
    }

    /// The indentation of objects put on the line after their predicate,
    /// relative to the predicate (defaults to 6).
    pub fn indent_property(&self) -> usize {
        self.indent_property
    }

    /// The minimal number of spaces between a subject and a predicate,
    /// or a predicate and its objects (defaults to 1).
    pub fn min_gap(&self) -> usize {
        self.min_gap
    }

    /// Transform an [`N3Config`] by setting the [`style`](Self::style).
    pub fn with_style(mut self, style: N3Style) -> Self {
        self.style = style;
        self
    }

    /// Transform an [`N3Config`] by setting the [`base`](Self::base).
    pub fn with_base<T: Into<String>>(mut self, base: T) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Transform an [`N3Config`] by setting the [`relative_iris`](Self::relative_iris) flag.
    pub fn with_relative_iris(mut self, relative_iris: bool) -> Self {
        self.relative_iris = relative_iris;
        self
    }

    /// Transform an [`N3Config`] by setting the [`list_types`](Self::list_types) flag.
    pub fn with_list_types(mut self, list_types: bool) -> Self {
        self.list_types = list_types;
        self
    }

    /// Transform an [`N3Config`] by setting the [`prefix_map`](Self::prefix_map).
    pub fn with_prefix_map(mut self, prefix_map: PrefixMap) -> Self {
        self.prefix_map = prefix_map;
        self
    }

    /// Transform an [`N3Config`] by setting the [`property_column`](Self::property_column).
    pub fn with_property_column(mut self, column: usize) -> Self {
        self.property_column = column;
        self
    }

    /// Transform an [`N3Config`] by setting the [`wide_property_len`](Self::wide_property_len).
    pub fn with_wide_property_len(mut self, len: usize) -> Self {
        self.wide_property_len = len;
        self
    }

    /// Transform an [`N3Config`] by setting the [`indent_property`](Self::indent_property).
    pub fn with_indent_property(mut self, indent: usize) -> Self {
        self.indent_property = indent;
        self
    }

    /// Transform an [`N3Config`] by setting the [`min_gap`](Self::min_gap).
    pub fn with_min_gap(mut self, gap: usize) -> Self {
        self.min_gap = gap;
        self
    }
}

impl Default for N3Config {
    fn default() -> Self {
        N3Config::new()
    }
}

/// N3 serializer.
pub struct N3Serializer<W> {
    config: N3Config,
    write: W,
}

impl<W> N3Serializer<W>
where
    W: io::Write,
{
    /// Build a new N3 serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> N3Serializer<W> {
        Self::new_with_config(write, N3Config::default())
    }

    /// Build a new N3 serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: N3Config) -> N3Serializer<W> {
        N3Serializer { config, write }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &N3Config {
        &self.config
    }

    /// Write `graph` as a complete N3 document.
    ///
    /// # Errors
    /// Errors of the graph are returned as a [`SourceError`],
    /// errors of the underlying writer as a [`SinkError`].
    pub fn serialize_graph<G>(&mut self, graph: &G) -> StreamResult<&mut Self, G::Error, io::Error>
    where
        G: Graph + ?Sized,
    {
        let triples: Vec<Triple> = graph
            .triples()
            .collect::<Result<_, _>>()
            .map_err(SourceError)?;
        let subjects = graph.subjects().map_err(SourceError)?;
        log::debug!("writing {} triple(s)", triples.len());
        _pretty::prettify(
            &triples,
            &subjects,
            &graph.prefixes(),
            &mut self.write,
            &self.config,
        )
        .map_err(SinkError)?;
        Ok(self)
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl N3Serializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        N3Serializer::new(Vec::new())
    }

    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    pub fn new_stringifier_with_config(config: N3Config) -> Self {
        N3Serializer::new_with_config(Vec::new(), config)
    }

    /// The text produced so far.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.write).unwrap_or_default()
    }
}
