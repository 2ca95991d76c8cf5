//! Graph collaborators for the spanning-tree driver.
//!
//! The driver consumes graphs only through [`UndirectedGraph`]: vertex
//! count, vertex enumeration, and incident-edge queries. [`AdjacencyGraph`]
//! is a minimal deterministic implementation of that surface.

pub mod adjacency;
pub mod undirected;

pub use adjacency::AdjacencyGraph;
pub use undirected::UndirectedGraph;
