//! A [`TermIndex`] is a bidirectional association of [terms](`Term`) with short numeric indices.
use quill_api::term::Term;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A [`TermIndex`] is a bidirectional association of [terms](`Term`) with short numeric indices.
///
/// Indices are allocated in the order in which terms are first seen, starting at 0.
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    t2i: HashMap<Term, u32>,
    i2t: Vec<Term>,
}

impl TermIndex {
    /// Get the index corresponding to term `t`, if it exists.
    pub fn get_index(&self, t: &Term) -> Option<u32> {
        self.t2i.get(t).copied()
    }

    /// Get the index corresponding to term `t`, adding it in the term-index if necessary.
    ///
    /// # Panics
    /// If more than `u32::MAX` distinct terms are indexed.
    pub fn ensure_index(&mut self, t: Term) -> u32 {
        match self.t2i.entry(t) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let i = u32::try_from(self.i2t.len()).expect("too many terms for a u32 index");
                self.i2t.push(e.key().clone());
                e.insert(i);
                i
            }
        }
    }

    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method may panic.
    pub fn get_term(&self, i: u32) -> &Term {
        &self.i2t[i as usize]
    }

    /// The number of indexed terms.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Is this index empty?
    pub fn is_empty(&self) -> bool {
        self.i2t.is_empty()
    }
}
