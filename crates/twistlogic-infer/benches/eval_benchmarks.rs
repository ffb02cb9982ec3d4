//! Performance benchmarks for parsing and evaluation
use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use twistlogic_algebra::{chain_lattice, ResiduatedLattice, TruthPair, TwistStructure};
use twistlogic_infer::{check_validity, Evaluate, Model, World};
use twistlogic_ir::{parse, Formula};

/// A ring of `n` worlds on a chain of `levels` labels; each world steps to its
/// two neighbours under `a`.
fn ring_model(n: usize, levels: usize) -> Model {
    let labels: Vec<String> = (0..levels).map(|i| format!("l{i}")).collect();
    let twist = Arc::new(TwistStructure::new(ResiduatedLattice::from_lattice(
        chain_lattice("Chain", labels.clone()),
    )));

    let mut builder = Model::builder("Ring", twist.clone());
    for i in 0..n {
        let t = &labels[i % levels];
        let f = &labels[(i * 7 + 3) % levels];
        builder = builder.world(
            World::new(format!("world_{i}"), format!("w{i}"), twist.clone())
                .with_assignment("p", TruthPair::new(t.as_str(), f.as_str()))
                .with_assignment("q", labels[(i + 1) % levels].as_str()),
        );
    }
    let top = &labels[levels - 1];
    let mid = &labels[levels / 2];
    for i in 0..n {
        builder = builder
            .relate_weighted(
                "a",
                format!("world_{i}"),
                format!("world_{}", (i + 1) % n),
                TruthPair::new(top.as_str(), labels[0].as_str()),
            )
            .relate_weighted(
                "a",
                format!("world_{i}"),
                format!("world_{}", (i + n - 1) % n),
                TruthPair::new(mid.as_str(), labels[0].as_str()),
            );
    }
    builder.build().unwrap()
}

// ===== Parsing Benchmarks =====

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for (name, text) in [
        ("atom", "p"),
        ("connectives", "~p & (q | r) -> s <-> t"),
        ("modal", "[a]<b>(p -> [c]~q) & <a>TOP"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| parse(black_box(text)).unwrap());
        });
    }

    group.finish();
}

// ===== Evaluation Benchmarks =====

fn nested_diamonds(depth: usize) -> Formula {
    (0..depth).fold(Formula::atom("p"), |f, _| Formula::modal_diamond("a", f))
}

fn bench_modal_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("modal_depth");
    let model = ring_model(16, 5);
    let world = model.get_world("w0").unwrap();

    for depth in [1usize, 2, 4, 6] {
        let formula = nested_diamonds(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &formula, |b, f| {
            b.iter(|| f.evaluate(&model, world, model.twist()).unwrap());
        });
    }

    group.finish();
}

fn bench_validity(c: &mut Criterion) {
    let mut group = c.benchmark_group("validity");
    let formula = parse("[a](p | ~p) -> <a>q").unwrap();

    for worlds in [8usize, 32, 128] {
        let model = ring_model(worlds, 5);
        group.throughput(Throughput::Elements(worlds as u64));
        group.bench_with_input(BenchmarkId::from_parameter(worlds), &model, |b, m| {
            b.iter(|| check_validity(black_box(&formula), m).unwrap());
        });
    }

    group.finish();
}

fn bench_twist_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("twist_construction");

    for levels in [2usize, 4, 8] {
        let labels: Vec<String> = (0..levels).map(|i| format!("l{i}")).collect();
        let lattice = chain_lattice("Chain", labels);
        group.bench_with_input(BenchmarkId::from_parameter(levels), &lattice, |b, l| {
            b.iter(|| TwistStructure::new(ResiduatedLattice::from_lattice(l.clone())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_modal_depth,
    bench_validity,
    bench_twist_construction
);

criterion_main!(benches);
