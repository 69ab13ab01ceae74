//! Core error types for pathgrid-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! failure modes of graph construction and lookup.

use crate::id::NodeId;
use thiserror::Error;

/// Errors produced by the pathgrid-core graph model.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Attempting to add a node with a label that already exists.
    #[error("duplicate node label: '{label}'")]
    DuplicateLabel { label: String },

    /// A node ID was not found in the graph.
    #[error("node not found: NodeId({id})", id = id.0)]
    NodeNotFound { id: NodeId },

    /// A node label was not found in the graph.
    #[error("unknown node label: '{label}'")]
    UnknownLabel { label: String },

    /// Attempting to connect a node to itself.
    #[error("self edge rejected: NodeId({id})", id = id.0)]
    SelfEdge { id: NodeId },

    /// An edge between the pair already exists (in either direction).
    #[error("duplicate edge: NodeId({a}) -- NodeId({b})", a = a.0, b = b.0)]
    DuplicateEdge { a: NodeId, b: NodeId },

    /// An edge weight outside the permitted [1, 100] range.
    #[error("edge weight out of range: {weight} (expected 1..=100)")]
    WeightOutOfRange { weight: u32 },
}
