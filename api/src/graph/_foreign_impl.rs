// this module only provides trait implementations, nothing is re-exported
use super::*;
use crate::term::{BnodeId, Term};
use crate::triple::Triple;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_VEC_BNODE: AtomicUsize = AtomicUsize::new(0);

/// A vector of triples is a graph; duplicates are never inserted.
impl Graph for Vec<Triple> {
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().cloned().map(Ok))
    }
}

impl MutableGraph for Vec<Triple> {
    type MutationError = Infallible;

    fn insert(&mut self, s: Term, p: Term, o: Term) -> MgResult<Self, bool> {
        let t = [s, p, o];
        if self.iter().any(|other| *other == t) {
            Ok(false)
        } else {
            self.push(t);
            Ok(true)
        }
    }

    /// Identifiers are `vb<n>`, from a counter shared by all vectors,
    /// skipping those that already occur in the graph.
    fn new_blank_node(&mut self) -> MgResult<Self, BnodeId> {
        loop {
            let n = NEXT_VEC_BNODE.fetch_add(1, Ordering::Relaxed);
            let id = BnodeId::new_unchecked(format!("vb{n}"));
            if !self.iter().flatten().any(|term| term.bnode_id() == Some(&id)) {
                return Ok(id);
            }
        }
    }
}
