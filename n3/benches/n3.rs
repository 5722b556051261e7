//! Parses and pretty-writes a generated document
//! mixing prefixed names, literals, lists and nested blank nodes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quill_inmem::LightGraph;
use quill_n3::serializer::N3Config;
use std::fmt::Write;

fn document(people: usize) -> String {
    let mut doc = String::from(
        "@prefix : <http://example.org/> .\n@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n",
    );
    for i in 0..people {
        let next = (i + 1) % people;
        writeln!(
            doc,
            ":p{i} a foaf:Person ;\n  foaf:name \"Person {i}\"@en ;\n  foaf:age {age} ;\n  \
             foaf:knows :p{next}, [ foaf:name \"friend of {i}\" ] ;\n  \
             :scores ( {i} {age}.5 1e{i} ) .",
            age = 20 + i % 50,
        )
        .unwrap();
    }
    doc
}

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for people in [10, 1000] {
        let doc = document(people);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(people), &doc, |b, doc| {
            b.iter(|| {
                let mut graph = LightGraph::new();
                black_box(quill_n3::parse_str(doc, &mut graph).unwrap());
            });
        });
    }
    group.finish();
}

fn pretty_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("pretty write");
    for people in [10, 1000] {
        let doc = document(people);
        let mut graph = LightGraph::new();
        quill_n3::parse_str(&doc, &mut graph).unwrap();
        group.throughput(Throughput::Elements(graph.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(people), &graph, |b, graph| {
            b.iter(|| black_box(quill_n3::serialize_to_string(graph, N3Config::new()).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, parse, pretty_write);
criterion_main!(benches);
