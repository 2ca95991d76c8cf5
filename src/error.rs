//! Error taxonomy for spanning-tree construction.
//!
//! All variants are fail-fast and non-retryable; nothing is corrected or
//! masked internally. Cancellation is deliberately *not* represented here -
//! a cancelled run is a normal [`RunOutcome::Cancelled`](crate::RunOutcome)
//! carrying whatever partial tree was already announced.

use thiserror::Error;

/// A specialized `Result` type for spanning-tree operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by graph construction and spanning-tree runs.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A caller-facing precondition was violated: an edge endpoint absent
    /// from the graph, or a driver re-run after reaching a terminal state.
    #[error("precondition violated: {message}")]
    Precondition {
        /// Description of the violated precondition.
        message: String,
    },

    /// The graph had zero vertices when the run started.
    #[error("the graph has no vertices")]
    EmptyGraph,

    /// The frontier was exhausted before every vertex was reached. The
    /// driver retains the partially built tree covering the start vertex's
    /// component.
    #[error("graph is disconnected: visited {visited} of {vertex_count} vertices before the frontier was exhausted")]
    Disconnected {
        /// Vertices reached before the heap emptied.
        visited: usize,
        /// Total vertices in the graph.
        vertex_count: usize,
    },

    /// The weight function produced a non-finite value. Weights must be
    /// finite and constant for the duration of a run.
    #[error("non-finite edge weight {weight} observed")]
    InvalidWeight {
        /// The offending value, widened to `f64` for reporting.
        weight: f64,
    },

    /// `extract_min` was called on an empty heap outside the documented
    /// heap-exhaustion termination path. Indicates a driver bug, not a
    /// caller error.
    #[error("extract_min called on an empty heap")]
    EmptyHeap,
}
