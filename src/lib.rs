//! # `arbor` - Incremental Spanning-Tree Construction
//!
//! A toolkit for building minimum spanning trees over weighted undirected
//! graphs using Prim's algorithm, driven by a binary min-heap over frontier
//! edges. The crate is organized around three pieces:
//!
//! - **Edges** (`edge`): the [`EdgeEnds`] seam every edge type implements,
//!   the plain [`Edge`] identity pair, and [`TaggedEdge`], which attaches a
//!   mutable, change-observable payload to an edge without disturbing its
//!   identity.
//! - **Graphs** (`graph`): the [`UndirectedGraph`] collaborator trait the
//!   driver consumes, plus [`AdjacencyGraph`], a deterministic adjacency-list
//!   container for tests, benchmarks, and small applications.
//! - **Spanning trees** (`mst`): [`EdgeMinHeap`], a min-heap over frontier
//!   edges supporting arbitrary mid-structure removal, and
//!   [`PrimSpanningTree`], the driver that owns visited-set growth, heap
//!   maintenance, event emission, and the termination and cancellation policy.
//!
//! ## Design
//!
//! One run of the driver executes on a single thread with no internal
//! parallelism; the heap and visited set are created inside `compute()` and
//! never outlive it. Weight functions are pure mappings from an edge to a
//! finite floating-point value (`num_traits::Float`); a non-finite weight is
//! a contract violation and fails the run. Edge identity is always the
//! `(source, target)` pair - a tagged edge's payload is excluded from
//! equality and hashing, so tag mutation can never perturb heap or
//! visited-set bookkeeping.
//!
//! Vertex and edge additions are announced through explicit callback lists,
//! invoked synchronously and in registration order from the run's thread.
//! Cancellation is cooperative: a zero-argument predicate queried once per
//! extracted edge, never preemptive.
//!
//! ## Example
//!
//! ```rust
//! use arbor::{AdjacencyGraph, Edge, EdgeEnds, PrimSpanningTree, RunOutcome};
//!
//! let mut graph = AdjacencyGraph::new();
//! for v in ['a', 'b', 'c'] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(Edge::new('a', 'b')).unwrap();
//! graph.add_edge(Edge::new('b', 'c')).unwrap();
//! graph.add_edge(Edge::new('a', 'c')).unwrap();
//!
//! let weights = |e: &Edge<char>| match (*e.source(), *e.target()) {
//!     ('a', 'b') => 1.0,
//!     ('b', 'c') => 2.0,
//!     _ => 3.0,
//! };
//!
//! let mut prim = PrimSpanningTree::new(&graph, weights);
//! let outcome = prim.compute().unwrap();
//!
//! assert_eq!(outcome, RunOutcome::Completed);
//! assert_eq!(prim.tree_edges().len(), 2);
//! assert_eq!(prim.total_weight(), 3.0);
//! ```

pub mod edge;
pub mod error;
pub mod graph;
pub mod mst;

pub use edge::{Edge, EdgeEnds, TaggedEdge};
pub use error::{Error, Result};
pub use graph::{AdjacencyGraph, UndirectedGraph};
pub use mst::{EdgeMinHeap, FrontierEdge, PrimSpanningTree, RunOutcome, RunState};
