//! In-memory implementation of [`Graph`] and [`MutableGraph`].
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::convert::Infallible;
use std::iter::empty;

use quill_api::graph::{GResult, GTripleSource, MgResult};
use quill_api::prefix::InvalidPrefix;
use quill_api::prelude::*;

use crate::index::TermIndex;

/// A graph with a single subject index.
/// Fast to load, with a relatively low memory footprint.
///
/// Triples are kept in insertion order, without duplicates,
/// so that serializing a freshly parsed graph follows the order of the source.
#[derive(Clone, Debug, Default)]
pub struct LightGraph {
    terms: TermIndex,
    triples: Vec<[u32; 3]>,
    set: HashSet<[u32; 3]>,
    by_subject: HashMap<u32, Vec<usize>>,
    subjects: Vec<u32>,
    prefixes: PrefixMap,
    next_bnode: usize,
}

impl LightGraph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of triples in this graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Is this graph empty?
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn get_triple(&self, ti: &[u32; 3]) -> Triple {
        ti.map(|i| self.terms.get_term(i).clone())
    }
}

impl Graph for LightGraph {
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.triples.iter().map(|ti| Ok(self.get_triple(ti))))
    }

    fn triples_matching<'s>(
        &'s self,
        s: Option<&'s Term>,
        p: Option<&'s Term>,
        o: Option<&'s Term>,
    ) -> GTripleSource<'s, Self> {
        let Some(s) = s else {
            return Box::new(self.triples().filter(move |t| match t {
                Ok(t) => t.matches(None, p, o),
                Err(_) => true,
            }));
        };
        let Some(positions) = self
            .terms
            .get_index(s)
            .and_then(|si| self.by_subject.get(&si))
        else {
            return Box::new(empty());
        };
        Box::new(
            positions
                .iter()
                .map(|pos| self.get_triple(&self.triples[*pos]))
                .filter(move |t| t.matches(None, p, o))
                .map(Ok),
        )
    }

    fn contains(&self, s: &Term, p: &Term, o: &Term) -> GResult<Self, bool> {
        let indices = (
            self.terms.get_index(s),
            self.terms.get_index(p),
            self.terms.get_index(o),
        );
        Ok(match indices {
            (Some(si), Some(pi), Some(oi)) => self.set.contains(&[si, pi, oi]),
            _ => false,
        })
    }

    fn subjects(&self) -> GResult<Self, Vec<Term>> {
        Ok(self
            .subjects
            .iter()
            .map(|si| self.terms.get_term(*si).clone())
            .collect())
    }

    fn prefixes(&self) -> PrefixMap {
        self.prefixes.clone()
    }
}

impl MutableGraph for LightGraph {
    /// Only [`set_prefix`](MutableGraph::set_prefix) can fail.
    type MutationError = InvalidPrefix;

    fn insert(&mut self, s: Term, p: Term, o: Term) -> MgResult<Self, bool> {
        let ti = [
            self.terms.ensure_index(s),
            self.terms.ensure_index(p),
            self.terms.ensure_index(o),
        ];
        if !self.set.insert(ti) {
            return Ok(false);
        }
        let pos = self.triples.len();
        self.triples.push(ti);
        match self.by_subject.entry(ti[0]) {
            Entry::Occupied(mut e) => e.get_mut().push(pos),
            Entry::Vacant(e) => {
                e.insert(vec![pos]);
                self.subjects.push(ti[0]);
            }
        }
        Ok(true)
    }

    /// Identifiers are `b<n>`, skipping those that already occur in the graph.
    fn new_blank_node(&mut self) -> MgResult<Self, BnodeId> {
        loop {
            let id = BnodeId::new_unchecked(format!("b{}", self.next_bnode));
            self.next_bnode += 1;
            if self.terms.get_index(&Term::BlankNode(id.clone())).is_none() {
                return Ok(id);
            }
        }
    }

    fn set_prefix(&mut self, prefix: &str, namespace: &str) -> MgResult<Self, ()> {
        self.prefixes.insert(prefix, namespace)
    }
}

impl FromIterator<Triple> for LightGraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut g = LightGraph::new();
        for [s, p, o] in iter {
            // a LightGraph never fails to insert a triple
            let _ = g.insert(s, p, o);
        }
        g
    }
}
