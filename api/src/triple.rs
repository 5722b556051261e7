//! A triple is the unit of information of an RDF graph.

use crate::term::Term;

/// A triple, as an array of three terms: subject, predicate, object.
pub type Triple = [Term; 3];

/// Accessors for the three positions of a [`Triple`].
pub trait TripleExt {
    /// The subject of this triple.
    fn s(&self) -> &Term;
    /// The predicate of this triple.
    fn p(&self) -> &Term;
    /// The object of this triple.
    fn o(&self) -> &Term;
    /// Does this triple match the given pattern (`None` matching any term)?
    fn matches(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> bool {
        s.map_or(true, |s| s == self.s())
            && p.map_or(true, |p| p == self.p())
            && o.map_or(true, |o| o == self.o())
    }
}

impl TripleExt for Triple {
    fn s(&self) -> &Term {
        &self[0]
    }
    fn p(&self) -> &Term {
        &self[1]
    }
    fn o(&self) -> &Term {
        &self[2]
    }
}
