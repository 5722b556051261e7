//! I define the [`Term`] type,
//! the nodes and arcs of RDF graphs.
//!
//! Terms are owned values: they can be freely cloned, hashed and compared,
//! and a graph can hand them over to its consumers without lifetime constraints.
//!
//! # Example
//! ```
//! use quill_api::term::{Literal, Term};
//!
//! let alice = Term::iri("http://example.org/alice");
//! let name = Term::from(Literal::new_lang("Alice", "en"));
//! assert!(alice.is_iri());
//! assert_eq!(name.to_string(), r#""Alice"@en"#);
//! ```
use std::fmt;

mod _bnode_id;
pub use _bnode_id::*;
mod _literal;
pub use _literal::*;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
}

/// An RDF term.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// An absolute IRI
    Iri(String),
    /// A blank node
    BlankNode(BnodeId),
    /// A literal
    Literal(Literal),
}

impl Term {
    /// Build an IRI term.
    ///
    /// NB: the IRI is not checked; parsers resolve IRIs before building terms.
    pub fn iri<T: Into<String>>(iri: T) -> Self {
        Term::Iri(iri.into())
    }

    /// Build a blank node term.
    pub fn bnode(id: BnodeId) -> Self {
        Term::BlankNode(id)
    }

    /// Build a plain literal term, with neither datatype nor language tag.
    pub fn plain<T: Into<String>>(lexical: T) -> Self {
        Term::Literal(Literal::new(lexical))
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Is this term an IRI?
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Is this term a blank node?
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Is this term a literal?
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// The IRI of this term, if it is an IRI.
    pub fn iri_str(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The identifier of this term, if it is a blank node.
    pub fn bnode_id(&self) -> Option<&BnodeId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// The literal value of this term, if it is a literal.
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The lexical form of this term, if it is a literal.
    pub fn lexical_form(&self) -> Option<&str> {
        self.literal().map(Literal::lexical_form)
    }

    /// The language tag of this term, if it is a language-tagged literal.
    pub fn language_tag(&self) -> Option<&str> {
        self.literal().and_then(Literal::language_tag)
    }

    /// The datatype IRI of this term, if it is a datatyped literal.
    pub fn datatype(&self) -> Option<&str> {
        self.literal().and_then(Literal::datatype)
    }
}

impl From<BnodeId> for Term {
    fn from(id: BnodeId) -> Self {
        Term::BlankNode(id)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// Terms are displayed in [N-Triples](https://www.w3.org/TR/n-triples/) syntax.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "_:{}", id.as_str()),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}
