//! Error types for the solve layer.

use pathgrid_core::NodeId;
use thiserror::Error;

/// Errors produced by the solver and path extraction.
#[derive(Debug, Error)]
pub enum SolveError {
    /// A node ID was not found in the graph.
    #[error("node not found: NodeId({id})", id = id.0)]
    NodeNotFound { id: NodeId },

    /// A node label was not found in the graph.
    #[error("unknown node label: '{label}'")]
    UnknownLabel { label: String },

    /// The requested node has no path from the start node.
    #[error("node '{label}' is unreachable from the start node")]
    Unreachable { label: String },

    /// A predecessor chain did not terminate at the start node.
    ///
    /// Only possible on a graph whose solve state was mutated outside the
    /// solver; a completed solve never produces predecessor cycles.
    #[error("predecessor chain from '{label}' does not reach the start node")]
    PredecessorCycle { label: String },
}
