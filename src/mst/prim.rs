//! Prim's algorithm over an undirected graph collaborator.
//!
//! The driver owns the run: visited-set growth, heap maintenance, event
//! emission, and the termination and cancellation policy. The heap and
//! visited set are created inside [`compute`](PrimSpanningTree::compute)
//! and discarded at its end; they never outlive one invocation.

use core::fmt;
use std::collections::HashSet;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::edge::EdgeEnds;
use crate::error::{Error, Result};
use crate::graph::UndirectedGraph;
use crate::mst::edge_heap::{EdgeMinHeap, FrontierEdge};

/// Lifecycle of one driver instance. Terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// `compute()` has not been called.
    NotStarted,
    /// `compute()` is executing.
    Running,
    /// The tree spans every vertex.
    Completed,
    /// Cancellation was observed; the partial tree is retained.
    Cancelled,
    /// An error terminated the run; partial results up to the failure are
    /// retained.
    Failed,
}

/// Successful outcomes of [`PrimSpanningTree::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The tree spans every vertex.
    Completed,
    /// The cancellation predicate returned `true` before the tree was
    /// complete.
    Cancelled,
}

/// A single-use Prim's-algorithm driver.
///
/// The start vertex is the first vertex the graph enumerates. The heap is
/// seeded with its incident edges, then the driver repeatedly extracts the
/// lightest frontier edge, marks its far endpoint visited, announces
/// `VertexAdded` then `EdgeAdded`, purges heap entries now targeting the
/// visited vertex, and reseeds from it. On success exactly
/// `vertex_count - 1` edges are announced, each vertex and edge once, in
/// tree-growth order.
///
/// Cancellation is queried once per outer iteration, before each
/// extraction; an in-progress heap mutation always runs to completion
/// before cancellation is honored.
///
/// # Example
///
/// ```rust
/// use arbor::{AdjacencyGraph, Edge, EdgeEnds, PrimSpanningTree};
///
/// let mut graph = AdjacencyGraph::new();
/// for v in 0..3u32 {
///     graph.add_vertex(v);
/// }
/// graph.add_edge(Edge::new(0, 1)).unwrap();
/// graph.add_edge(Edge::new(1, 2)).unwrap();
///
/// let mut prim = PrimSpanningTree::new(&graph, |e: &Edge<u32>| {
///     f64::from(e.source() + e.target())
/// });
/// prim.compute().unwrap();
/// assert_eq!(prim.tree_vertices(), &[0, 1, 2]);
/// ```
pub struct PrimSpanningTree<'a, G, W, F>
where
    G: UndirectedGraph,
{
    graph: &'a G,
    weight: F,
    cancelled: Option<Box<dyn Fn() -> bool + 'a>>,
    vertex_observers: Vec<Box<dyn FnMut(&G::Vertex) + 'a>>,
    edge_observers: Vec<Box<dyn FnMut(&G::Edge) + 'a>>,
    state: RunState,
    tree_vertices: Vec<G::Vertex>,
    tree_edges: Vec<G::Edge>,
    total_weight: W,
}

impl<'a, G, W, F> PrimSpanningTree<'a, G, W, F>
where
    G: UndirectedGraph,
    W: Float,
    F: Fn(&G::Edge) -> W,
{
    /// Creates a driver over `graph` keyed by `weight`.
    ///
    /// The weight function must be pure and constant for the duration of
    /// the run, and must not read mutable tag state.
    pub fn new(graph: &'a G, weight: F) -> Self {
        Self {
            graph,
            weight,
            cancelled: None,
            vertex_observers: Vec::new(),
            edge_observers: Vec::new(),
            state: RunState::NotStarted,
            tree_vertices: Vec::new(),
            tree_edges: Vec::new(),
            total_weight: W::zero(),
        }
    }

    /// Installs a cooperative cancellation predicate, queried once per
    /// extracted edge.
    pub fn with_cancellation<P>(mut self, predicate: P) -> Self
    where
        P: Fn() -> bool + 'a,
    {
        self.cancelled = Some(Box::new(predicate));
        self
    }

    /// Registers an observer for each vertex added to the tree, invoked
    /// synchronously in registration order.
    pub fn on_vertex_added<O>(&mut self, observer: O)
    where
        O: FnMut(&G::Vertex) + 'a,
    {
        self.vertex_observers.push(Box::new(observer));
    }

    /// Registers an observer for each edge added to the tree, invoked
    /// synchronously in registration order, after the `VertexAdded`
    /// notification for the edge's far endpoint.
    pub fn on_edge_added<O>(&mut self, observer: O)
    where
        O: FnMut(&G::Edge) + 'a,
    {
        self.edge_observers.push(Box::new(observer));
    }

    /// Runs the algorithm to a terminal state.
    ///
    /// # Errors
    /// - [`Error::Precondition`] if this driver already ran.
    /// - [`Error::EmptyGraph`] if the graph has no vertices.
    /// - [`Error::InvalidWeight`] on the first non-finite weight, before
    ///   any notification for the offending edge.
    /// - [`Error::Disconnected`] if the frontier is exhausted with
    ///   unvisited vertices remaining; notifications already fired cover
    ///   exactly the start vertex's component.
    pub fn compute(&mut self) -> Result<RunOutcome> {
        if self.state != RunState::NotStarted {
            return Err(Error::Precondition {
                message: "compute() may only be called once per driver".to_owned(),
            });
        }
        let vertex_count = self.graph.vertex_count();
        if vertex_count == 0 {
            self.state = RunState::Failed;
            return Err(Error::EmptyGraph);
        }
        self.state = RunState::Running;

        #[cfg(feature = "tracing")]
        tracing::debug!(vertex_count, "starting spanning-tree construction");

        let mut visited: HashSet<G::Vertex> = HashSet::with_capacity(vertex_count);
        let mut heap: EdgeMinHeap<G::Vertex, G::Edge, W> = EdgeMinHeap::new();

        let start = match self.graph.vertices().next() {
            Some(vertex) => vertex.clone(),
            None => return Err(self.fail(Error::EmptyGraph)),
        };
        visited.insert(start.clone());
        self.announce_vertex(start.clone());
        if let Err(error) = self.seed_frontier(&start, &visited, &mut heap) {
            return Err(self.fail(error));
        }

        while visited.len() < vertex_count {
            if self.is_cancelled() {
                self.state = RunState::Cancelled;
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    tree_vertices = self.tree_vertices.len(),
                    "run cancelled"
                );
                return Ok(RunOutcome::Cancelled);
            }

            let next = loop {
                if heap.is_empty() {
                    return Err(self.fail(Error::Disconnected {
                        visited: visited.len(),
                        vertex_count,
                    }));
                }
                let entry = match heap.extract_min() {
                    Ok(entry) => entry,
                    Err(error) => return Err(self.fail(error)),
                };
                // Stale entries can survive between purges; skip them.
                if !visited.contains(entry.frontier()) {
                    break entry;
                }
            };

            let (edge, vertex, weight) = next.into_parts();
            visited.insert(vertex.clone());
            self.announce_vertex(vertex.clone());
            self.announce_edge(edge, weight);
            heap.remove_all_targeting(&vertex);
            if let Err(error) = self.seed_frontier(&vertex, &visited, &mut heap) {
                return Err(self.fail(error));
            }
        }

        self.state = RunState::Completed;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            tree_edges = self.tree_edges.len(),
            "spanning tree complete"
        );
        Ok(RunOutcome::Completed)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Vertices in the order they joined the tree. After a `Cancelled` or
    /// `Failed` run this is the partially visited set.
    pub fn tree_vertices(&self) -> &[G::Vertex] {
        &self.tree_vertices
    }

    /// Edges in the order they joined the tree.
    pub fn tree_edges(&self) -> &[G::Edge] {
        &self.tree_edges
    }

    /// Sum of the weights of the tree edges announced so far.
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Inserts every edge incident to `from` whose far endpoint is
    /// unvisited, validating each weight before insertion.
    fn seed_frontier(
        &self,
        from: &G::Vertex,
        visited: &HashSet<G::Vertex>,
        heap: &mut EdgeMinHeap<G::Vertex, G::Edge, W>,
    ) -> Result<()> {
        for edge in self.graph.incident_edges(from) {
            let far = match edge.opposite(from) {
                Some(far) => far,
                None => continue,
            };
            if visited.contains(far) {
                continue;
            }
            let weight = self.checked_weight(edge)?;
            heap.insert(FrontierEdge::new(edge.clone(), far.clone(), weight));
        }
        Ok(())
    }

    fn checked_weight(&self, edge: &G::Edge) -> Result<W> {
        let weight = (self.weight)(edge);
        if !weight.is_finite() {
            return Err(Error::InvalidWeight {
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(weight)
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.as_deref().map_or(false, |predicate| predicate())
    }

    fn announce_vertex(&mut self, vertex: G::Vertex) {
        for observer in &mut self.vertex_observers {
            observer(&vertex);
        }
        self.tree_vertices.push(vertex);
    }

    fn announce_edge(&mut self, edge: G::Edge, weight: W) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            weight = weight.to_f64().unwrap_or(f64::NAN),
            "edge accepted into tree"
        );
        for observer in &mut self.edge_observers {
            observer(&edge);
        }
        self.total_weight = self.total_weight + weight;
        self.tree_edges.push(edge);
    }

    fn fail(&mut self, error: Error) -> Error {
        self.state = RunState::Failed;
        error
    }
}

impl<'a, G, W, F> fmt::Debug for PrimSpanningTree<'a, G, W, F>
where
    G: UndirectedGraph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimSpanningTree")
            .field("state", &self.state)
            .field("tree_vertices", &self.tree_vertices.len())
            .field("tree_edges", &self.tree_edges.len())
            .finish()
    }
}
