use super::*;
use crate::parser::{ParseError, Parser};
use quill_api::graph::Graph;
use quill_api::ns::xsd;
use quill_api::source::StreamError;
use quill_api::triple::Triple;
use quill_inmem::LightGraph;
use test_case::test_case;

type Failure = StreamError<ParseError, MaterializeError>;

fn materialize(input: &str, config: MaterializerConfig) -> Result<LightGraph, Failure> {
    let mut graph = LightGraph::new();
    Parser::new(input).parse(Materializer::new_with_config(&mut graph, config))?;
    Ok(graph)
}

fn triples(input: &str) -> Vec<Triple> {
    let config = MaterializerConfig::new().with_base("http://example.org/doc");
    let graph = materialize(input, config).unwrap();
    graph.triples().collect::<Result<_, _>>().unwrap()
}

fn sink_error(input: &str) -> MaterializeError {
    match materialize(input, MaterializerConfig::new()) {
        Err(StreamError::SinkError(err)) => err,
        Err(StreamError::SourceError(err)) => panic!("unexpected syntax error: {err}"),
        Ok(_) => panic!("no error for {input:?}"),
    }
}

fn ex(suffix: &str) -> Term {
    Term::iri(format!("http://example.org/doc#{suffix}"))
}

#[test]
fn prefixes_and_base() {
    let got = triples("@prefix : <#> .\n@prefix p: <other/> .\n:a p:b <c> .");
    assert_eq!(
        got,
        vec![[
            ex("a"),
            Term::iri("http://example.org/other/b"),
            Term::iri("http://example.org/c")
        ]]
    );
}

#[test]
fn empty_prefix_is_the_document() {
    let got = triples("@prefix d: <> .\nd: d: d: .");
    let doc = Term::iri("http://example.org/doc");
    assert_eq!(got, vec![[doc.clone(), doc.clone(), doc]]);
}

#[test]
fn prefixes_reach_the_graph() {
    let config = MaterializerConfig::new().with_base("http://example.org/doc");
    let graph = materialize("@prefix ex: <#> .", config).unwrap();
    assert_eq!(
        graph.prefixes().get_namespace("ex"),
        Some("http://example.org/doc#")
    );
}

#[test]
fn bare_scheme_base() {
    let config = MaterializerConfig::new().with_base("eh:");
    let graph = materialize("@prefix : <> .\n:a !:b !:c .", config).unwrap();
    let got: Vec<Triple> = graph.triples().collect::<Result<_, _>>().unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0][0], Term::iri("eh:a"));
    assert_eq!(got[0][1], Term::iri("eh:b"));
    assert!(got[0][2].is_blank_node());
    assert_eq!(got[1][0], got[0][2]);
    assert_eq!(got[1][1], Term::iri("eh:c"));
    assert!(got[1][2].is_blank_node());
    assert_ne!(got[1][2], got[0][2]);
}

#[test_case("a :o", rdf::type_.term(), false; "a")]
#[test_case("= :o", owl::sameAs.term(), false; "same as")]
#[test_case("=> :o", n3log::implies.term(), false; "implies")]
#[test_case("<= :o", n3log::implies.term(), true; "implied by")]
#[test_case("<=> :o", n3log::means.term(), false; "means")]
fn operators(verb_object: &str, predicate: Term, swapped: bool) {
    let got = triples(&format!("@prefix : <#> .\n:s {verb_object} ."));
    let expected = if swapped {
        [ex("o"), predicate, ex("s")]
    } else {
        [ex("s"), predicate, ex("o")]
    };
    assert_eq!(got, vec![expected]);
}

#[test]
fn literals() {
    let got = triples("@prefix : <#> .\n:s :p \"chat\"@fr, 42, \"x\"^^:dt, \"y\" .");
    let objects: Vec<Term> = got.into_iter().map(|[_, _, o]| o).collect();
    assert_eq!(
        objects,
        vec![
            Literal::new_lang("chat", "fr").into(),
            Literal::new_dt("42", xsd::integer.iri()).into(),
            Literal::new_dt("x", "http://example.org/doc#dt").into(),
            Term::plain("y"),
        ]
    );
}

#[test]
fn lists_without_types() {
    let got = triples("@prefix : <#> .\n:s :p (1 2) .");
    assert_eq!(got.len(), 5);
    assert!(!got.iter().any(|t| rdf::type_ == t[1]));
    assert!(rdf::first == got[0][1]);
    assert!(rdf::rest == got[1][1]);
    assert_eq!(got[1][2], got[2][0]);
    assert_eq!(got[3][2], rdf::nil.term());
    assert_eq!(got[4][2], got[0][0]);
}

#[test]
fn lists_with_types() {
    let config = MaterializerConfig::new()
        .with_base("http://example.org/doc")
        .with_list_types(true);
    let graph = materialize("@prefix : <#> .\n:s :p (1 2) .", config).unwrap();
    assert_eq!(graph.len(), 7);
    let typed = graph
        .triples_matching(None, Some(&rdf::type_.term()), Some(&rdf::List.term()))
        .count();
    assert_eq!(typed, 2);
}

#[test]
fn blank_labels_are_interned() {
    let got = triples("@prefix : <#> .\n_:x :p _:x .\n_:y :p _:x .\n[] :p _:x .");
    assert_eq!(got.len(), 3);
    let x = got[0][0].clone();
    assert!(x.is_blank_node());
    assert_eq!(got[0][2], x);
    assert_eq!(got[1][2], x);
    assert_eq!(got[2][2], x);
    assert_ne!(got[1][0], x);
    assert_ne!(got[2][0], x);
    assert_ne!(got[2][0], got[1][0]);
}

#[test]
fn triple_count_ignores_duplicates() {
    let mut graph = LightGraph::new();
    let config = MaterializerConfig::new().with_base("http://example.org/");
    let mut materializer = Materializer::new_with_config(&mut graph, config);
    Parser::new("<a> <b> <c> .\n<a> <b> <c>, <d> .")
        .parse(&mut materializer)
        .unwrap();
    assert_eq!(materializer.triple_count(), 2);
    assert_eq!(materializer.prefixes().len(), 0);
    assert_eq!(graph.len(), 2);
}

#[test]
fn other_directives_are_ignored() {
    assert!(triples("@keywords a, is, of .").is_empty());
}

#[test_case("ex:a ex:b ex:c .", "line 1: undefined prefix 'ex:'"; "undefined prefix")]
#[test_case("@prefix : <http://e/> .\n{ :a :b :c } :d :e .", "line 2: formulas are not supported"; "formula")]
#[test_case("@prefix : <http://e/> .\n:a :b { :c :d :e } .", "line 2: formulas are not supported"; "formula object")]
#[test_case("@prefix : <http://e/> .\n?x :p :o .", "line 2: ?x is not supported"; "variable")]
#[test_case("@prefix : <http://e/> .\n:s :p this .", "line 2: this is not supported"; "this")]
#[test_case("@prefix : <http://e/> .\n\"x\" :p :o .", "line 2: literal \"x\" can not be a subject"; "literal subject")]
#[test_case("@prefix : <http://e/> .\n:s <= \"x\" .", "line 2: literal \"x\" can not be a subject"; "literal subject after swap")]
#[test_case("@prefix : <http://e/> .\n:s _:p :o .", "line 2: _:p can not be a predicate"; "blank predicate")]
#[test_case("@prefix : <http://e/> .\n:s :p \"x\"^^\"y\" .", "line 2: \"y\" can not be used as a datatype"; "literal datatype")]
fn errors(input: &str, message: &str) {
    assert_eq!(sink_error(input).to_string(), message);
}

#[test]
fn relative_iri_without_base() {
    let err = sink_error("<a> <http://e/p> <http://e/o> .");
    assert!(matches!(
        err,
        MaterializeError::Iri {
            line: 1,
            source: quill_iri::UriError::NullBase
        }
    ));
}

#[test]
fn error_line() {
    let err = sink_error("@prefix : <http://e/> .\n:a :b :c .\n\n:a :b x:c .");
    assert_eq!(err.line(), 4);
}
