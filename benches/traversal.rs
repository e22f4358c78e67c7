extern crate graphwalk;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphwalk::{graph::DynRepresentation, prelude::*};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use strum::IntoEnumIterator;

const NODES: u32 = 512;
const EDGES: usize = 4096;

/// Builds the same seeded random directed graph in the requested representation.
fn random_graph(kind: RepresentationKind) -> Graph<u32, i64, DynRepresentation<u32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    let mut graph = Graph::directed(kind.create());
    for node in 1..NODES {
        graph.add(Edge::new(node - 1, node).with_weight(rng.random_range(1..100)));
    }
    for _ in 0..EDGES {
        let u = rng.random_range(0..NODES);
        let v = rng.random_range(0..NODES);
        graph.add(Edge::new(u, v).with_weight(rng.random_range(1..100)));
    }
    graph
}

/// Benchmark the unweighted traversals per representation.
///
/// Adjacency lookups dominate here, so this mostly measures how quickly each
/// representation answers "outgoing edges of u".
fn bench_unweighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("unweighted");
    group.throughput(Throughput::Elements(u64::from(NODES)));

    for kind in RepresentationKind::iter() {
        let graph = random_graph(kind);
        group.bench_with_input(BenchmarkId::new("dfs", kind), &graph, |b, graph| {
            b.iter(|| black_box(DepthFirstSearch::new(black_box(graph), 0)));
        });
        group.bench_with_input(BenchmarkId::new("bfs", kind), &graph, |b, graph| {
            b.iter(|| black_box(BreadthFirstSearch::new(black_box(graph), 0)));
        });
    }
    group.finish();
}

/// Benchmark SPFA against Bellman-Ford on identical non-negative inputs.
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.throughput(Throughput::Elements(u64::from(NODES)));

    for kind in RepresentationKind::iter() {
        let graph = random_graph(kind);
        group.bench_with_input(BenchmarkId::new("spfa", kind), &graph, |b, graph| {
            b.iter(|| black_box(ShortestPathFaster::new(black_box(graph), 0).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", kind), &graph, |b, graph| {
            b.iter(|| black_box(BellmanFord::new(black_box(graph), 0).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unweighted, bench_shortest_paths);
criterion_main!(benches);
