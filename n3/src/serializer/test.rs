use super::*;
use crate::materializer::MaterializerConfig;
use quill_api::term::{Literal, Term};
use quill_inmem::LightGraph;
use test_case::test_case;

const EX: &str = "@prefix : <http://example.org/> .\n";

fn graph(n3: &str) -> LightGraph {
    let mut g = LightGraph::new();
    crate::parse_str(n3, &mut g).unwrap();
    g
}

fn write(g: &LightGraph, config: N3Config) -> String {
    let mut ser = N3Serializer::new_stringifier_with_config(config);
    ser.serialize_graph(g).unwrap();
    ser.as_str().to_string()
}

fn pretty(n3: &str) -> String {
    write(&graph(n3), N3Config::new())
}

#[test]
fn empty_graph() {
    assert_eq!(pretty(""), "");
}

#[test]
fn properties_are_aligned() {
    let got = pretty(&format!(
        "{EX}:alice :knows :bob ; a :Person ; :knows :carol ; :name \"Alice\" ."
    ));
    assert_eq!(
        got,
        "@prefix : <http://example.org/> .

:alice  a :Person ;
        :knows :bob,
               :carol ;
        :name \"Alice\" .
"
    );
}

#[test]
fn inline_blank_nodes_and_lists() {
    let got = pretty(&format!("{EX}:s :p [ :q 1 ; :r ( \"x\" :y ) ] ."));
    assert_eq!(
        got,
        "@prefix : <http://example.org/> .

:s      :p [ :q 1 ;
             :r ( \"x\" :y ) ] .
"
    );
}

#[test]
fn empty_blank_node() {
    let got = pretty(&format!("{EX}:s :p [] ."));
    assert_eq!(got, format!("{EX}\n:s      :p [] .\n"));
}

#[test]
fn unreferenced_blank_subject() {
    let got = pretty(&format!("{EX}[ :p :o ] ."));
    assert_eq!(got, format!("{EX}\n[]      :p :o .\n"));
}

#[test]
fn shared_blank_node_is_labelled() {
    let got = pretty(&format!("{EX}:s :p _:x .\n:t :p _:x .\n_:x :q :o ."));
    assert_eq!(
        got,
        format!("{EX}\n:s      :p _:b0 .\n\n:t      :p _:b0 .\n\n_:b0    :q :o .\n")
    );
}

#[test]
fn unreferenced_list() {
    assert_eq!(pretty("( 1 2 ) ."), "( 1 2 ) .\n");
}

#[test]
fn cycle_of_blank_nodes() {
    let got = pretty(&format!("{EX}_:a :p _:b .\n_:b :p _:a ."));
    assert_eq!(got, format!("{EX}\n_:b0    :p [ :p _:b0 ] .\n"));
}

#[test]
fn self_reference() {
    let got = pretty(&format!("{EX}_:a :p _:a ."));
    assert_eq!(got, format!("{EX}\n_:b0    :p _:b0 .\n"));
}

#[test]
fn escaped_literal() {
    let got = pretty(&format!("{EX}:s :p \"he said \\\"hi\\\"\" ."));
    assert_eq!(got, format!("{EX}\n:s      :p \"he said \\\"hi\\\"\" .\n"));
}

#[test]
fn multiline_literal() {
    let got = pretty(&format!("{EX}:s :p \"\"\"two\nlines\"\"\" ."));
    assert_eq!(got, format!("{EX}\n:s      :p \"\"\"two\nlines\"\"\" .\n"));
}

#[test_case("\"chat\"@fr", "\"chat\"@fr"; "language tag")]
#[test_case("\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>", "1"; "integer")]
#[test_case("-1.5", "-1.5"; "decimal")]
#[test_case("1e10", "1e10"; "double")]
#[test_case("\"01x\"^^<http://www.w3.org/2001/XMLSchema#integer>", "\"01x\"^^xsd:integer"; "ill-formed integer")]
#[test_case("\"x\"^^:dt", "\"x\"^^:dt"; "custom datatype")]
fn literal_objects(input: &str, expected: &str) {
    let got = pretty(&format!("{EX}:s :p {input} ."));
    let last = got.lines().last().unwrap();
    assert_eq!(last, format!(":s      :p {expected} ."));
}

#[test]
fn well_known_prefix_is_declared() {
    let got = pretty(&format!(
        "{EX}:s <http://www.w3.org/2000/01/rdf-schema#label> \"s\" ."
    ));
    assert!(got.starts_with(EX));
    assert!(got.contains("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n"));
    assert!(got.ends_with("\n:s      rdfs:label \"s\" .\n"));
}

#[test_case("a", "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"; "a")]
#[test_case("=", "<http://www.w3.org/2002/07/owl#sameAs>"; "same as")]
#[test_case("=>", "<http://www.w3.org/2000/10/swap/log#implies>"; "implies")]
#[test_case("<=>", "<http://www.w3.org/2000/10/swap/log#means>"; "means")]
fn short_predicates(short: &str, iri: &str) {
    let got = pretty(&format!("{EX}:s {iri} :o ."));
    assert_eq!(got, format!("{EX}\n:s      {short} :o .\n"));
}

#[test]
fn wide_predicate() {
    let got = pretty(&format!("{EX}:s :aVeryLongPredicateName :o, :p ."));
    assert_eq!(
        got,
        format!("{EX}\n:s      :aVeryLongPredicateName\n              :o,\n              :p .\n")
    );
}

#[test]
fn long_subject() {
    let got = pretty(&format!("{EX}<http://example.org/long/subject> :p :o ."));
    assert_eq!(
        got,
        format!("{EX}\n<http://example.org/long/subject>\n        :p :o .\n")
    );
}

#[test]
fn layout_settings() {
    let config = N3Config::new()
        .with_property_column(4)
        .with_min_gap(2)
        .with_wide_property_len(2)
        .with_indent_property(2);
    let got = write(&graph(&format!("{EX}:s :p :o ; :long :o .")), config);
    assert_eq!(
        got,
        format!("{EX}\n:s  :p  :o ;\n    :long\n      :o .\n")
    );
}

#[test]
fn relative_iris() {
    let g: Vec<Triple> = vec![[
        Term::iri("http://example.org/dir/doc#a"),
        Term::iri("http://example.org/dir/p"),
        Term::iri("http://example.org/other"),
    ]];
    let config = N3Config::new().with_base("http://example.org/dir/doc");
    let mut ser = N3Serializer::new_stringifier_with_config(config.clone());
    ser.serialize_graph(&g).unwrap();
    assert_eq!(ser.as_str(), "<#a>    <p> <../other> .\n");

    let mut ser = N3Serializer::new_stringifier_with_config(config.with_relative_iris(false));
    ser.serialize_graph(&g).unwrap();
    assert_eq!(
        ser.as_str(),
        "<http://example.org/dir/doc#a>
        <http://example.org/dir/p>
              <http://example.org/other> .
"
    );
}

#[test]
fn config_prefixes() {
    let mut prefixes = PrefixMap::new();
    prefixes.insert("ex", "http://example.org/").unwrap();
    let g: Vec<Triple> = vec![[
        Term::iri("http://example.org/s"),
        Term::iri("http://example.org/p"),
        Term::Literal(Literal::new("o")),
    ]];
    let mut ser = N3Serializer::new_stringifier_with_config(N3Config::new().with_prefix_map(prefixes));
    ser.serialize_graph(&g).unwrap();
    assert_eq!(
        ser.as_str(),
        "@prefix ex: <http://example.org/> .\n\nex:s    ex:p \"o\" .\n"
    );
}

#[test]
fn plain_style() {
    let config = N3Config::new().with_style(N3Style::Plain);
    let got = write(&graph(&format!("{EX}:s :p :o, [ :q :r ] .")), config);
    assert_eq!(
        got,
        format!("{EX}\n:s      :p :o,\n           _:b0 .\n\n_:b0    :q :r .\n")
    );
}

#[test]
fn triples_style() {
    let config = N3Config::new().with_style(N3Style::Triples);
    let got = write(&graph(&format!("{EX}:s :p :o, [ :q :r ] .")), config);
    assert_eq!(
        got,
        format!("{EX}\n:s :p :o .\n_:b0 :q :r .\n:s :p _:b0 .\n")
    );
}

#[test]
fn typed_lists() {
    let n3 = format!("{EX}:s :p ( :a ) .");
    let mut g = LightGraph::new();
    let config = MaterializerConfig::new().with_list_types(true);
    crate::parse_str_with_config(&n3, &mut g, config).unwrap();

    let got = write(&g, N3Config::new().with_list_types(true));
    assert_eq!(got, format!("{EX}\n:s      :p ( :a ) .\n"));

    let got = write(&g, N3Config::new());
    assert!(!got.contains("( :a )"));
    assert!(got.contains("rdf:List"));
}

#[test]
fn untyped_lists_with_list_types() {
    let got = write(
        &graph(&format!("{EX}:s :p ( :a ) .")),
        N3Config::new().with_list_types(true),
    );
    assert!(!got.contains("( :a )"));
    assert!(got.contains(":s      :p [ "));
    assert!(got.contains("rdf:first :a"));
}

#[test]
fn config_accessors() {
    let config = N3Config::default()
        .with_style(N3Style::Plain)
        .with_base("http://example.org/");
    assert_eq!(config.style(), N3Style::Plain);
    assert_eq!(config.base(), Some("http://example.org/"));
    assert!(config.relative_iris());
    assert!(!config.list_types());
    assert!(config.prefix_map().is_empty());
    assert_eq!(config.property_column(), 8);
    assert_eq!(config.wide_property_len(), 20);
    assert_eq!(config.indent_property(), 6);
    assert_eq!(config.min_gap(), 1);
    let ser = N3Serializer::new_with_config(vec![], config);
    assert_eq!(ser.config().style(), N3Style::Plain);
    assert!(ser.into_inner().is_empty());
}
