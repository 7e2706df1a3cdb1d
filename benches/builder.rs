use criterion::{criterion_group, criterion_main, Criterion};
use kgframe::{
    AggregationData, Condition, Dataset, ExpandableDataset, KnowledgeGraph, RdfPredicate,
};

fn build_chain(predicates: &[RdfPredicate]) -> ExpandableDataset {
    let mut ds = ExpandableDataset::new(
        KnowledgeGraph::new("bench"),
        "films",
        (0..64).map(|i| format!("dbpr:Film_{}", i)),
        "film",
    )
    .expect("seed");
    ds.expand("film", predicates).expect("expand");
    ds.filter(vec![("genre", vec![Condition::new("!= dbpr:Horror")])])
        .expect("filter");
    let mut grouped = ds.group_by(&["genre"]).expect("group_by");
    grouped.count(&[AggregationData::new("film", "films", None)]);
    ds
}

fn bench_builder(c: &mut Criterion) {
    let predicates: Vec<RdfPredicate> = (0..32)
        .map(|i| RdfPredicate::outgoing(format!("dbpp:p{}", i), format!("c{}", i)))
        .chain(std::iter::once(RdfPredicate::outgoing("dbpp:genre", "genre")))
        .collect();

    c.bench_function("build_chain_33_expansions", |b| {
        b.iter(|| build_chain(&predicates))
    });

    let ds = build_chain(&predicates);
    c.bench_function("describe_and_fingerprint", |b| {
        b.iter(|| ds.describe().expect("describe"))
    });
}

criterion_group!(benches, bench_builder);
criterion_main!(benches);
