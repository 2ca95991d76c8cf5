use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbor::{AdjacencyGraph, Edge, EdgeEnds, PrimSpanningTree};

/// Deterministic pseudo-random weight from an edge's endpoints.
fn scrambled_weight(e: &Edge<u32>) -> f64 {
    let mixed = e
        .source()
        .wrapping_mul(2_654_435_761)
        .wrapping_add(e.target().wrapping_mul(40_503));
    f64::from(mixed % 9973) + 1.0
}

fn grid_graph(side: u32) -> AdjacencyGraph<Edge<u32>> {
    let mut graph = AdjacencyGraph::with_capacity((side * side) as usize);
    for v in 0..side * side {
        graph.add_vertex(v);
    }
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                graph.add_edge(Edge::new(v, v + 1)).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(Edge::new(v, v + side)).unwrap();
            }
        }
    }
    graph
}

fn complete_graph(n: u32) -> AdjacencyGraph<Edge<u32>> {
    let mut graph = AdjacencyGraph::with_capacity(n as usize);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(Edge::new(i, j)).unwrap();
        }
    }
    graph
}

fn bench_prim_grid(c: &mut Criterion) {
    let graph = grid_graph(32);

    c.bench_function("prim_mst_grid_32x32", |b| {
        b.iter(|| {
            let mut prim = PrimSpanningTree::new(&graph, scrambled_weight);
            prim.compute().unwrap();
            black_box(prim.total_weight())
        });
    });
}

fn bench_prim_complete(c: &mut Criterion) {
    let graph = complete_graph(64);

    c.bench_function("prim_mst_complete_k64", |b| {
        b.iter(|| {
            let mut prim = PrimSpanningTree::new(&graph, scrambled_weight);
            prim.compute().unwrap();
            black_box(prim.tree_edges().len())
        });
    });
}

fn bench_prim_with_observers(c: &mut Criterion) {
    let graph = grid_graph(32);

    c.bench_function("prim_mst_grid_32x32_observed", |b| {
        b.iter(|| {
            let count = std::cell::Cell::new(0usize);
            let mut prim = PrimSpanningTree::new(&graph, scrambled_weight);
            prim.on_edge_added(|_| count.set(count.get() + 1));
            prim.compute().unwrap();
            black_box(count.get())
        });
    });
}

criterion_group!(
    benches,
    bench_prim_grid,
    bench_prim_complete,
    bench_prim_with_observers
);
criterion_main!(benches);
