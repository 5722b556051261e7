use super::*;
use quill_api::term::{BnodeId, Literal, Term};
use quill_api::triple::Triple;
use std::error::Error;

fn iri(suffix: &str) -> Term {
    Term::iri(format!("http://xmlns.com/foaf/0.1/{suffix}"))
}

fn bn(id: &str) -> Term {
    Term::bnode(BnodeId::new_unchecked(id))
}

fn make_graph(alice: Term, bob: Term) -> Vec<Triple> {
    vec![
        [alice.clone(), iri("name"), Term::plain("alice")],
        [alice.clone(), iri("mbox"), Term::iri("mailto:alice@work.example")],
        [alice.clone(), iri("knows"), bob.clone()],
        [bob.clone(), iri("name"), Term::plain("bob")],
    ]
}

#[test]
fn no_bnode() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(Term::iri("#alice"), Term::iri("#bob"));
    assert!(isomorphic_graphs(&g1, &g1)?);

    let g2 = make_graph(Term::iri("#a"), Term::iri("#b"));
    assert!(!isomorphic_graphs(&g1, &g2)?);
    assert!(!isomorphic_graphs(&g2, &g1)?);

    let g3 = g1[1..].to_vec();
    assert!(!isomorphic_graphs(&g1, &g3)?);
    assert!(!isomorphic_graphs(&g3, &g1)?);
    Ok(())
}

#[test]
fn simple() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(bn("alice"), bn("bob"));
    assert!(isomorphic_graphs(&g1, &g1)?);

    let g2 = make_graph(bn("a"), bn("b"));
    assert!(isomorphic_graphs(&g1, &g2)?);
    assert!(isomorphic_graphs(&g2, &g1)?);

    let g3 = g1[1..].to_vec();
    assert!(!isomorphic_graphs(&g1, &g3)?);
    assert!(!isomorphic_graphs(&g3, &g1)?);

    let mut g4 = g1.clone();
    g4[3][0] = bn("bobby");
    assert!(!isomorphic_graphs(&g1, &g4)?);
    assert!(!isomorphic_graphs(&g4, &g1)?);

    let mut g5 = g1.clone();
    g5[3][2] = Term::from(Literal::new_lang("bob", "en"));
    assert!(!isomorphic_graphs(&g1, &g5)?);
    Ok(())
}

#[test]
fn duplicates_are_ignored() -> Result<(), Box<dyn Error>> {
    let g1 = make_graph(bn("alice"), bn("bob"));
    let mut g2 = make_graph(bn("x"), bn("y"));
    g2.push(g2[0].clone());
    assert!(isomorphic_graphs(&g1, &g2)?);
    Ok(())
}

/// Two rings of blank nodes: only color refinement plus backtracking can tell.
fn ring(ids: &[&str]) -> Vec<Triple> {
    let p = iri("knows");
    (0..ids.len())
        .map(|i| [bn(ids[i]), p.clone(), bn(ids[(i + 1) % ids.len()])])
        .collect()
}

#[test]
fn rings() -> Result<(), Box<dyn Error>> {
    let r6 = ring(&["a", "b", "c", "d", "e", "f"]);
    let r6bis = ring(&["f", "e", "d", "c", "b", "a"]);
    assert!(isomorphic_graphs(&r6, &r6bis)?);

    // two rings of 3 vs. one ring of 6: same size, same local structure
    let mut two_r3 = ring(&["a", "b", "c"]);
    two_r3.extend(ring(&["d", "e", "f"]));
    assert!(!isomorphic_graphs(&r6, &two_r3)?);
    assert!(!isomorphic_graphs(&two_r3, &r6)?);
    Ok(())
}

#[test]
fn lists() -> Result<(), Box<dyn Error>> {
    use quill_api::ns::rdf;
    let list = |ids: [&str; 2], items: [&str; 2]| -> Vec<Triple> {
        vec![
            [bn(ids[0]), rdf::first.term(), Term::plain(items[0])],
            [bn(ids[0]), rdf::rest.term(), bn(ids[1])],
            [bn(ids[1]), rdf::first.term(), Term::plain(items[1])],
            [bn(ids[1]), rdf::rest.term(), rdf::nil.term()],
        ]
    };
    assert!(isomorphic_graphs(&list(["l1", "l2"], ["x", "y"]), &list(["b0", "b1"], ["x", "y"]))?);
    assert!(!isomorphic_graphs(&list(["l1", "l2"], ["x", "y"]), &list(["b0", "b1"], ["y", "x"]))?);
    Ok(())
}
