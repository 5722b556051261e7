use crate::hash::{hash_triple_with, Colors};
use quill_api::graph::Graph;
use quill_api::source::{
    StreamError::{SinkError, SourceError},
    StreamResult,
};
use quill_api::term::{BnodeId, Term};
use quill_api::triple::Triple;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// Computes whether two graphs are isomorphic.
///
/// # Error
/// If an error occurs while traversing `g1`,
/// a [`SourceError`](quill_api::source::StreamError::SourceError) is returned.
///
/// If an error occurs while traversing `g2`,
/// a [`SinkError`](quill_api::source::StreamError::SinkError) is returned.
pub fn isomorphic_graphs<G1, G2>(g1: &G1, g2: &G2) -> StreamResult<bool, G1::Error, G2::Error>
where
    G1: Graph + ?Sized,
    G2: Graph + ?Sized,
{
    let t1 = prepare_graph(g1).map_err(SourceError)?;
    let t2 = prepare_graph(g2).map_err(SinkError)?;
    Ok(isomorphic_triples(&t1, &t2))
}

/// Collect the triples of `g`, without duplicates.
fn prepare_graph<G: Graph + ?Sized>(g: &G) -> Result<Vec<Triple>, G::Error> {
    let mut seen = HashSet::new();
    let mut ret = vec![];
    for t in g.triples() {
        let t = t?;
        if seen.insert(t.clone()) {
            ret.push(t);
        }
    }
    Ok(ret)
}

fn isomorphic_triples(t1: &[Triple], t2: &[Triple]) -> bool {
    // Graphs must have the same size
    if t1.len() != t2.len() {
        return false;
    }
    let set2: HashSet<&Triple> = t2.iter().collect();
    let (ground1, bnode_triples1): (Vec<_>, Vec<_>) = t1.iter().partition(|t| is_ground(t));
    if !ground1.iter().all(|t| set2.contains(t)) {
        return false;
    }
    let bnode_triples2: Vec<_> = t2.iter().filter(|t| !is_ground(t)).collect();
    if bnode_triples1.len() != bnode_triples2.len() {
        return false;
    }

    let occ1 = occurrences(&bnode_triples1);
    let occ2 = occurrences(&bnode_triples2);
    if occ1.len() != occ2.len() {
        return false;
    }
    let mut colors1: Colors = occ1.keys().map(|b| (*b, 0)).collect();
    let mut colors2: Colors = occ2.keys().map(|b| (*b, 0)).collect();
    loop {
        let new1 = refine(&occ1, &colors1);
        let new2 = refine(&occ2, &colors2);
        let stable =
            distinct(&new1) == distinct(&colors1) && distinct(&new2) == distinct(&colors2);
        colors1 = new1;
        colors2 = new2;
        if stable {
            break;
        }
    }
    let classes1 = classes(&colors1);
    let classes2 = classes(&colors2);
    if classes1.len() != classes2.len()
        || classes1
            .iter()
            .zip(classes2.iter())
            .any(|((c1, b1), (c2, b2))| c1 != c2 || b1.len() != b2.len())
    {
        log::trace!("blank node colors differ");
        return false;
    }

    // try the most constrained blank nodes first
    let mut order: Vec<&BnodeId> = occ1.keys().copied().collect();
    order.sort_by(|x, y| {
        let kx = (classes1[&colors1[x]].len(), x);
        let ky = (classes1[&colors1[y]].len(), y);
        kx.cmp(&ky)
    });
    let mut search = Search {
        order,
        occ1: &occ1,
        colors1: &colors1,
        classes2: &classes2,
        set2: &set2,
        mapping: HashMap::new(),
        used: HashSet::new(),
    };
    search.run(0)
}

fn is_ground(t: &Triple) -> bool {
    !t.iter().any(Term::is_blank_node)
}

/// For each blank node, the triples it occurs in.
fn occurrences<'a>(triples: &[&'a Triple]) -> BTreeMap<&'a BnodeId, Vec<&'a Triple>> {
    let mut ret: BTreeMap<&BnodeId, Vec<&Triple>> = BTreeMap::new();
    for &t in triples {
        let mut seen: Vec<&BnodeId> = vec![];
        for b in t.iter().filter_map(Term::bnode_id) {
            if !seen.contains(&b) {
                seen.push(b);
                ret.entry(b).or_default().push(t);
            }
        }
    }
    ret
}

/// One round of color refinement.
fn refine<'a>(occ: &BTreeMap<&'a BnodeId, Vec<&'a Triple>>, colors: &Colors<'a>) -> Colors<'a> {
    occ.iter()
        .map(|(b, triples)| {
            let mut hashes: Vec<u64> = triples
                .iter()
                .map(|t| hash_triple_with(t, colors, b))
                .collect();
            hashes.sort_unstable();
            let mut state = DefaultHasher::new();
            colors[b].hash(&mut state);
            hashes.hash(&mut state);
            (*b, state.finish())
        })
        .collect()
}

fn distinct(colors: &Colors) -> usize {
    colors.values().collect::<HashSet<_>>().len()
}

/// Blank nodes grouped by color, in color order.
fn classes<'a>(colors: &Colors<'a>) -> BTreeMap<u64, Vec<&'a BnodeId>> {
    let mut ret: BTreeMap<u64, Vec<&BnodeId>> = BTreeMap::new();
    for (b, c) in colors {
        ret.entry(*c).or_default().push(*b);
    }
    ret
}

/// Backtracking search for a color-preserving bijection between blank nodes.
struct Search<'a, 'b> {
    order: Vec<&'a BnodeId>,
    occ1: &'b BTreeMap<&'a BnodeId, Vec<&'a Triple>>,
    colors1: &'b Colors<'a>,
    classes2: &'b BTreeMap<u64, Vec<&'a BnodeId>>,
    set2: &'b HashSet<&'a Triple>,
    mapping: HashMap<&'a BnodeId, &'a BnodeId>,
    used: HashSet<&'a BnodeId>,
}

impl<'a, 'b> Search<'a, 'b> {
    fn run(&mut self, i: usize) -> bool {
        let Some(b1) = self.order.get(i).copied() else {
            return true;
        };
        let candidates = match self.classes2.get(&self.colors1[b1]) {
            Some(c) => c.clone(),
            None => return false,
        };
        for b2 in candidates {
            if self.used.contains(b2) {
                continue;
            }
            self.mapping.insert(b1, b2);
            self.used.insert(b2);
            if self.consistent(b1) && self.run(i + 1) {
                return true;
            }
            self.mapping.remove(b1);
            self.used.remove(b2);
        }
        false
    }

    /// Check every triple of `b1` whose blank nodes are all mapped.
    fn consistent(&self, b1: &BnodeId) -> bool {
        self.occ1[b1].iter().all(|t| match self.map_triple(t) {
            Some(mapped) => self.set2.contains(&mapped),
            None => true,
        })
    }

    fn map_triple(&self, t: &Triple) -> Option<Triple> {
        let mut ret = t.clone();
        for term in ret.iter_mut() {
            if let Term::BlankNode(b) = term {
                *b = (*self.mapping.get(&*b)?).clone();
            }
        }
        Some(ret)
    }
}
