//! Criterion benchmarks for pathgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use pathgraph::Graph;

/// Build a random directed graph over vertices 0..vertex_count.
fn make_random_graph(vertex_count: usize, edges_per_vertex: usize) -> Graph<usize> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(true);
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for from in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let to = rng.gen_range(0..vertex_count);
            if to != from {
                graph.add_edge(from, to).unwrap();
            }
        }
    }
    graph
}

/// Undirected ring, worst case for BFS depth.
fn make_ring_graph(vertex_count: usize) -> Graph<usize> {
    let mut graph = Graph::new(false);
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count {
        graph.add_edge(v, (v + 1) % vertex_count).unwrap();
    }
    graph
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("add_vertex_1k", |b| {
        b.iter(|| {
            let mut graph = Graph::new(true);
            for v in 0..1_000usize {
                graph.add_vertex(v);
            }
            graph
        })
    });

    c.bench_function("add_edge_random_1k_x8", |b| {
        b.iter(|| make_random_graph(1_000, 8))
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let random = make_random_graph(10_000, 8);
    c.bench_function("shortest_path_random_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let from = rng.gen_range(0..10_000usize);
            let to = rng.gen_range(0..10_000usize);
            random.shortest_path(&from, &to).unwrap()
        })
    });

    let ring = make_ring_graph(10_000);
    c.bench_function("shortest_path_ring_10k_antipodal", |b| {
        b.iter(|| ring.shortest_path(&0, &5_000).unwrap())
    });
}

criterion_group!(benches, bench_mutation, bench_shortest_path);
criterion_main!(benches);
