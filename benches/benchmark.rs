use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use mansyntax::frame::{FrameParser, describe_error};
use mansyntax::fresh::NoFreshEntities;
use mansyntax::model::{Entity, EntityType, Iri};
use mansyntax::ontology::{Ontology, OntologyCatalog, OntologyId};
use mansyntax::shortform::{BidirectionalShortFormProvider, SimpleShortFormProvider};
use mansyntax::tokenizer::tokenize;

const NS: &str = "http://example.org/bench#";

// an ontology with n classes C0..Cn and n object properties p0..pn
fn parser(n: usize) -> FrameParser {
    let mut root = Ontology::new(OntologyId::new(Iri::new("http://example.org/bench").unwrap()));
    for i in 0..n {
        root.declare(Entity::new(EntityType::Class, Iri::new(format!("{NS}C{i}")).unwrap()));
        root.declare(Entity::new(EntityType::ObjectProperty, Iri::new(format!("{NS}p{i}")).unwrap()));
    }
    let short_forms = BidirectionalShortFormProvider::from_ontologies([&root], &SimpleShortFormProvider);
    let root = Arc::new(root);
    let catalog: OntologyCatalog = [root.clone()].into_iter().collect();
    FrameParser::new(root, Arc::new(short_forms), Arc::new(catalog))
}

fn frames(n: usize) -> String {
    (1..n)
        .map(|i| format!("Class: C{i}\n    SubClassOf: C{}, p{i} some (C0 or not C{})\n", i - 1, i - 1))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let small = parser(10);
    let text = "Class: C1 SubClassOf: C0 and p1 some C2, p2 min 2 C3 EquivalentTo: {}";
    c.bench_function("parse one frame", |b| {
        b.iter(|| small.parse(black_box("Class: C1 SubClassOf: C0 and p1 some C2, p2 min 2 C3"), &NoFreshEntities))
    });
    c.bench_function("describe failure", |b| {
        b.iter(|| {
            let error = small.parse(black_box(text), &NoFreshEntities).unwrap_err();
            describe_error(&error)
        })
    });
    let long = "C0, ".repeat(20_000);
    c.bench_function("tokenize 40k tokens", |b| b.iter(|| tokenize(black_box(&long))));
    let large = parser(1000);
    let text = frames(1000);
    c.bench_function("parse 1k frames", |b| b.iter(|| large.parse(black_box(&text), &NoFreshEntities)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
