//! First pass of the pretty writer:
//! finding the lists and the blank nodes that can be written inline.

use quill_api::ns::rdf;
use quill_api::term::Term;
use quill_api::triple::Triple;
use std::collections::{HashMap, HashSet};

/// What the writer needs to know about blank nodes before writing anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Analysis {
    /// Well-formed lists, in the order of their last cell in the graph
    pub lists: Vec<List>,
    /// All the cells of `lists`
    pub list_cells: HashSet<Term>,
    /// Blank nodes referenced exactly once, and not part of a list
    pub single_refs: HashSet<Term>,
    /// Number of references to each blank node
    /// (an occurrence as predicate counts as two references, as it can never be inlined)
    pub refs: HashMap<Term, usize>,
}

/// A list whose cells can all be written as `( … )`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct List {
    /// The cells, head first
    pub cells: Vec<Term>,
    /// The items, in order
    pub items: Vec<Term>,
}

impl List {
    pub fn head(&self) -> &Term {
        &self.cells[0]
    }
}

impl Analysis {
    /// Number of references to `term`.
    pub fn ref_count(&self, term: &Term) -> usize {
        self.refs.get(term).copied().unwrap_or(0)
    }
}

/// Analyze `triples`.
///
/// A blank node is a list cell if it has exactly one `rdf:first`, exactly one `rdf:rest`,
/// exactly one `rdf:type rdf:List` iff `list_types` is set, and no other property.
/// Lists are found from their last cell (whose `rdf:rest` is `rdf:nil`),
/// walking backward as long as each cell is referenced once, by its predecessor.
pub(crate) fn analyze(triples: &[Triple], list_types: bool) -> Analysis {
    let mut refs: HashMap<&Term, usize> = HashMap::new();
    let mut referrer: HashMap<&Term, &Triple> = HashMap::new();
    let mut outgoing: HashMap<&Term, Vec<&Triple>> = HashMap::new();
    for t in triples {
        let [s, p, o] = t;
        if s.is_blank_node() {
            outgoing.entry(s).or_default().push(t);
        }
        if p.is_blank_node() {
            *refs.entry(p).or_default() += 2;
        }
        if o.is_blank_node() {
            *refs.entry(o).or_default() += 1;
            referrer.insert(o, t);
        }
    }
    let ref_count = |t: &Term| refs.get(t).copied().unwrap_or(0);
    let cell_item = |t: &Term| {
        outgoing
            .get(t)
            .and_then(|props| list_item(props, list_types))
    };

    let mut lists = vec![];
    let mut list_cells: HashSet<Term> = HashSet::new();
    for [s, p, o] in triples {
        if !s.is_blank_node() || rdf::rest != *p || rdf::nil != *o {
            continue;
        }
        if ref_count(s) > 1 || list_cells.contains(s) {
            continue;
        }
        let Some(item) = cell_item(s) else {
            continue;
        };
        let mut chain = vec![(s, item)];
        let mut current = s;
        while ref_count(current) == 1 {
            let Some([prev, p, _]) = referrer.get(current).copied() else {
                break;
            };
            if rdf::rest != *p
                || !prev.is_blank_node()
                || ref_count(prev) > 1
                || list_cells.contains(prev)
                || chain.iter().any(|(cell, _)| *cell == prev)
            {
                break;
            }
            let Some(item) = cell_item(prev) else {
                break;
            };
            chain.push((prev, item));
            current = prev;
        }
        chain.reverse();
        let (cells, items): (Vec<Term>, Vec<Term>) = chain
            .into_iter()
            .map(|(cell, item)| (cell.clone(), item.clone()))
            .unzip();
        list_cells.extend(cells.iter().cloned());
        lists.push(List { cells, items });
    }

    let single_refs: HashSet<Term> = refs
        .iter()
        .filter(|(t, n)| **n == 1 && !list_cells.contains(**t))
        .map(|(t, _)| (*t).clone())
        .collect();
    let refs = refs.into_iter().map(|(t, n)| (t.clone(), n)).collect();
    log::debug!(
        "{} list(s), {} inlineable blank node(s)",
        lists.len(),
        single_refs.len()
    );
    Analysis {
        lists,
        list_cells,
        single_refs,
        refs,
    }
}

/// The item of a list cell, given all its outgoing triples.
fn list_item<'a>(props: &[&'a Triple], list_types: bool) -> Option<&'a Term> {
    let mut first = None;
    let mut rest = false;
    let mut typed = false;
    for [_, p, o] in props.iter().copied() {
        if rdf::first == *p && first.is_none() {
            first = Some(o);
        } else if rdf::rest == *p && !rest {
            rest = true;
        } else if list_types && rdf::type_ == *p && rdf::List == *o && !typed {
            typed = true;
        } else {
            return None;
        }
    }
    if rest && typed == list_types {
        first
    } else {
        None
    }
}
