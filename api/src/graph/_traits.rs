// this module is transparently re-exported by its parent `graph`
use crate::prefix::PrefixMap;
use crate::term::{BnodeId, Term};
use crate::triple::{Triple, TripleExt};
use std::collections::HashSet;
use std::error::Error;

/// Type alias for results produced by a graph.
pub type GResult<G, T> = Result<T, <G as Graph>::Error>;
/// Type alias for fallible triple iterators produced by a graph.
pub type GTripleSource<'a, G> = Box<dyn Iterator<Item = GResult<G, Triple>> + 'a>;
/// Type alias for results produced by a mutable graph.
pub type MgResult<G, T> = Result<T, <G as MutableGraph>::MutationError>;

/// Generic trait for RDF graphs.
///
/// Triples are handed over as owned values;
/// implementations are expected to yield them in a stable order,
/// which serializers rely on to produce deterministic output.
pub trait Graph {
    /// The error type that this graph may raise.
    type Error: 'static + Error;

    /// An iterator visiting all triples of this graph.
    ///
    /// This iterator is fallible:
    /// its items are `Result`s,
    /// an error may occur at any time during the iteration.
    fn triples(&self) -> GTripleSource<'_, Self>;

    /// An iterator visiting all triples matching the given pattern,
    /// where `None` matches any term.
    ///
    /// See also [`triples`](Graph::triples).
    fn triples_matching<'s>(
        &'s self,
        s: Option<&'s Term>,
        p: Option<&'s Term>,
        o: Option<&'s Term>,
    ) -> GTripleSource<'s, Self> {
        Box::new(self.triples().filter(move |res| match res {
            Ok(t) => t.matches(s, p, o),
            Err(_) => true,
        }))
    }

    /// Return `true` if this graph contains the given triple.
    fn contains(&self, s: &Term, p: &Term, o: &Term) -> GResult<Self, bool> {
        match self.triples_matching(Some(s), Some(p), Some(o)).next() {
            None => Ok(false),
            Some(Ok(_)) => Ok(true),
            Some(Err(err)) => Err(err),
        }
    }

    /// The subjects of this graph, in the order of their first appearance
    /// in [`triples`](Graph::triples), without duplicates.
    fn subjects(&self) -> GResult<Self, Vec<Term>> {
        let mut seen = HashSet::new();
        let mut ret = vec![];
        for t in self.triples() {
            let [s, _, _] = t?;
            if seen.insert(s.clone()) {
                ret.push(s);
            }
        }
        Ok(ret)
    }

    /// The prefixes declared on this graph, if any.
    ///
    /// Serializers use them to abbreviate IRIs.
    fn prefixes(&self) -> PrefixMap {
        PrefixMap::new()
    }
}

/// Generic trait for graphs that can be populated.
pub trait MutableGraph: Graph {
    /// The error type that this graph may raise during mutations.
    type MutationError: 'static + Error;

    /// Insert the given triple in this graph.
    ///
    /// Return `true` iff the triple was actually inserted
    /// (i.e. it was not already present).
    fn insert(&mut self, s: Term, p: Term, o: Term) -> MgResult<Self, bool>;

    /// Allocate a blank node identifier that is not used in this graph yet,
    /// and that will not be returned again by this method.
    fn new_blank_node(&mut self) -> MgResult<Self, BnodeId>;

    /// Declare a prefix on this graph, so that serializers can reuse it.
    ///
    /// The default implementation ignores the declaration.
    fn set_prefix(&mut self, prefix: &str, namespace: &str) -> MgResult<Self, ()> {
        let _ = (prefix, namespace);
        Ok(())
    }
}
