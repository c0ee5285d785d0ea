//! Benchmarks for the graph store's hot paths: edge toggling and
//! shared-partner computation over synthetic networks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dyadnet_core::{ActorId, RelationGraph, SharedPartnerKind};

/// Creates a synthetic directed graph for benchmarking.
///
/// Edges follow a deterministic stride pattern so runs are reproducible
/// while still spreading ties across the actor set.
fn create_synthetic_graph(n_actors: u32, edges_per_actor: u32) -> RelationGraph {
    let mut graph = RelationGraph::new(n_actors, true);
    for from in 1..=n_actors {
        for k in 1..=edges_per_actor {
            let to = (from + k * 7) % n_actors + 1;
            if to != from {
                graph.add_edge(ActorId(from), ActorId(to)).unwrap();
            }
        }
    }
    graph
}

fn bench_shared_partners(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_partners");
    for &n in &[100u32, 1_000, 10_000] {
        let graph = create_synthetic_graph(n, 10);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("otp", n), &graph, |b, graph| {
            b.iter(|| {
                let mut total = 0usize;
                for i in 1..n {
                    let partners = graph
                        .shared_partners(
                            black_box(ActorId(i)),
                            black_box(ActorId(i + 1)),
                            SharedPartnerKind::Otp,
                        )
                        .unwrap();
                    total += partners.len();
                }
                total
            })
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_edge");
    let n = 1_000u32;
    group.bench_function("toggle_pairs", |b| {
        let mut graph = create_synthetic_graph(n, 10);
        b.iter(|| {
            for i in 1..n {
                graph
                    .toggle_edge(black_box(ActorId(i)), black_box(ActorId(i + 1)))
                    .unwrap();
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_shared_partners, bench_toggle);
criterion_main!(benches);
