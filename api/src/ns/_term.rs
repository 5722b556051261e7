// this module is transparently re-exported by its parent `ns`
use crate::term::Term;
use quill_iri::resolve::Oxiri;
use std::fmt;

/// A term belonging to a namespace,
/// i.e. an IRI made of a namespace and a suffix.
///
/// See the [`namespace!`](crate::namespace) macro.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NsTerm {
    ns: &'static str,
    suffix: &'static str,
}

impl NsTerm {
    /// Build an `NsTerm` without checking that the resulting IRI is valid.
    pub const fn new_unchecked(ns: &'static str, suffix: &'static str) -> Self {
        NsTerm { ns, suffix }
    }

    /// The namespace of this term.
    pub fn ns(&self) -> &'static str {
        self.ns
    }

    /// The suffix of this term.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// The full IRI of this term.
    pub fn iri(&self) -> String {
        format!("{}{}", self.ns, self.suffix)
    }

    /// Convert to a [`Term`].
    pub fn term(&self) -> Term {
        Term::Iri(self.iri())
    }

    /// Is `iri` the IRI of this term?
    pub fn matches_iri(&self, iri: &str) -> bool {
        iri.len() == self.ns.len() + self.suffix.len()
            && iri.starts_with(self.ns)
            && iri.ends_with(self.suffix)
    }

    /// Is `term` this term?
    pub fn matches(&self, term: &Term) -> bool {
        term.iri_str().is_some_and(|iri| self.matches_iri(iri))
    }

    /// Is the IRI of this term a valid absolute IRI?
    pub fn is_valid(&self) -> bool {
        Oxiri::parse(self.iri()).is_ok()
    }
}

impl PartialEq<Term> for NsTerm {
    fn eq(&self, other: &Term) -> bool {
        self.matches(other)
    }
}

impl PartialEq<NsTerm> for Term {
    fn eq(&self, other: &NsTerm) -> bool {
        other.matches(self)
    }
}

impl From<NsTerm> for Term {
    fn from(nsterm: NsTerm) -> Self {
        nsterm.term()
    }
}

impl fmt::Display for NsTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ns, self.suffix)
    }
}
