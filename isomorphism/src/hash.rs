//! I define parameterized hashing function,
//! where blank nodes are hashed according to a given map.

use quill_api::term::{BnodeId, Term};
use quill_api::triple::Triple;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// The color of each blank node during refinement.
pub type Colors<'a> = HashMap<&'a BnodeId, u64>;

/// Hash this term, using a blank-node map for hashing blank nodes
///
/// The blank node `context.0` is additionally marked with its position `context.1`,
/// so that a blank node is distinguished from the others in its own triples.
pub fn hash_term_with<H>(t: &Term, map: &Colors, context: (&BnodeId, char), state: &mut H)
where
    H: Hasher,
{
    if let Some(bnid) = t.bnode_id() {
        if bnid == context.0 {
            context.1.hash(state);
        }
        map.get(bnid).hash(state);
    } else {
        t.hash(state);
    }
}

/// Hash a triple, using a blank-node map for hashing blank nodes
pub fn hash_triple_with(t: &Triple, map: &Colors, context: &BnodeId) -> u64 {
    let mut state = std::collections::hash_map::DefaultHasher::new();
    let [s, p, o] = t;
    hash_term_with(s, map, (context, 's'), &mut state);
    hash_term_with(p, map, (context, 'p'), &mut state);
    hash_term_with(o, map, (context, 'o'), &mut state);
    state.finish()
}
