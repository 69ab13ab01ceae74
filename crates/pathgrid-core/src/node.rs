//! The node weight stored in the graph.
//!
//! A [`PathNode`] carries its human-readable label plus the mutable
//! shortest-path solve state: best-known distance from the start node, the
//! predecessor it was relaxed from, and the finalized flag. Distance uses
//! `Option<u32>` as an explicit "unknown/unreachable" sentinel -- `None`
//! until the node is first relaxed, so a legitimate distance of zero (the
//! start node) is never ambiguous.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// A labeled node with in-place shortest-path solve state.
///
/// The solver mutates `distance`, `predecessor`, and `visited` as it runs;
/// generation creates nodes with all three unset. `distance` only ever
/// decreases once set, and `visited` flips to `true` exactly once per solve,
/// after all of the node's outgoing relaxations have been applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathNode {
    /// Unique human-readable label ("a", "b", ...).
    pub label: String,
    /// Best-known path weight from the start node. `None` = not yet reached.
    pub distance: Option<u32>,
    /// The node this one was last relaxed from. `None` = no path found yet.
    pub predecessor: Option<NodeId>,
    /// Set once the node's distance is final.
    pub visited: bool,
}

impl PathNode {
    /// Creates a fresh node with no solve state.
    pub fn new(label: impl Into<String>) -> Self {
        PathNode {
            label: label.into(),
            distance: None,
            predecessor: None,
            visited: false,
        }
    }

    /// Returns `true` if the node has been finalized by the solver.
    pub fn is_settled(&self) -> bool {
        self.visited
    }

    /// Returns `true` if some path from the start has reached this node.
    pub fn is_reached(&self) -> bool {
        self.distance.is_some()
    }

    /// Clears distance, predecessor, and visited, returning the node to its
    /// pre-solve state.
    pub fn reset_solve_state(&mut self) {
        self.distance = None;
        self.predecessor = None;
        self.visited = false;
    }
}
