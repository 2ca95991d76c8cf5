//! Builds a small road network, computes its minimum spanning tree, and
//! prints the tree as it grows.
//!
//! Run with `cargo run --example build_mst`.

use std::collections::HashMap;

use anyhow::{Context, Result};

use arbor::{AdjacencyGraph, Edge, EdgeEnds, PrimSpanningTree};

fn main() -> Result<()> {
    let roads = [
        ("depot", "north", 4.0),
        ("depot", "east", 9.0),
        ("north", "east", 7.0),
        ("north", "mill", 2.0),
        ("east", "mill", 5.0),
        ("east", "harbor", 3.0),
        ("mill", "harbor", 8.0),
    ];

    let mut graph = AdjacencyGraph::new();
    let mut lengths = HashMap::new();
    for (from, to, length) in roads {
        graph.add_vertex(from);
        graph.add_vertex(to);
        graph
            .add_edge(Edge::new(from, to))
            .with_context(|| format!("failed to add road {from} -> {to}"))?;
        lengths.insert((from, to), length);
    }

    let length_of = |e: &Edge<&str>| lengths[&(*e.source(), *e.target())];

    let mut prim = PrimSpanningTree::new(&graph, length_of);
    prim.on_vertex_added(|v| println!("reached {v}"));
    prim.on_edge_added(|e: &Edge<&str>| println!("  via {} -- {}", e.source(), e.target()));

    let outcome = prim.compute().context("spanning-tree run failed")?;

    println!(
        "{outcome:?}: {} roads, total length {}",
        prim.tree_edges().len(),
        prim.total_weight()
    );
    Ok(())
}
