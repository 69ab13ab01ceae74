//! WeightedGraph: the owning graph container.
//!
//! [`WeightedGraph`] is the single entry point for constructing and querying
//! the graph. The underlying storage is a private undirected
//! `StableGraph<PathNode, u32>`; all mutations go through `WeightedGraph`
//! methods so the construction invariants hold at every point:
//!
//! - node labels are unique
//! - no self edges
//! - at most one edge per unordered node pair
//! - every edge weight is in `[MIN_WEIGHT, MAX_WEIGHT]`
//!
//! Because the graph is undirected, adjacency is symmetric by construction:
//! a single stored edge serves both endpoints with the same weight, so
//! `neighbors(a)` contains `b` exactly when `neighbors(b)` contains `a`.

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{Dfs, EdgeRef, IntoEdgeReferences};
use petgraph::Undirected;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::id::{EdgeId, NodeId};
use crate::node::PathNode;

/// Smallest permitted edge weight.
pub const MIN_WEIGHT: u32 = 1;
/// Largest permitted edge weight.
pub const MAX_WEIGHT: u32 = 100;

/// An undirected weighted graph with per-node shortest-path solve state.
///
/// The inner graph is private; mutation goes through `WeightedGraph` methods
/// to maintain the construction invariants. Read-only accessors are provided
/// for traversal, reporting, and visualization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightedGraph {
    /// The owning node/edge storage.
    inner: StableGraph<PathNode, u32, Undirected, u32>,
    /// Label -> node lookup, in node insertion order.
    labels: IndexMap<String, NodeId>,
}

impl WeightedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        WeightedGraph::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Adds a node with the given label.
    ///
    /// Returns the new [`NodeId`]. Errors if the label is already taken.
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeId, GraphError> {
        let label = label.into();
        if self.labels.contains_key(&label) {
            return Err(GraphError::DuplicateLabel { label });
        }
        let idx = self.inner.add_node(PathNode::new(label.clone()));
        let id = NodeId::from(idx);
        self.labels.insert(label, id);
        Ok(id)
    }

    /// Adds an undirected edge between two nodes.
    ///
    /// Both nodes must exist, `a != b`, the pair must not already be
    /// connected, and `weight` must be in `[MIN_WEIGHT, MAX_WEIGHT]`.
    /// Returns the new [`EdgeId`].
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: u32) -> Result<EdgeId, GraphError> {
        let a_idx: NodeIndex<u32> = a.into();
        let b_idx: NodeIndex<u32> = b.into();

        if self.inner.node_weight(a_idx).is_none() {
            return Err(GraphError::NodeNotFound { id: a });
        }
        if self.inner.node_weight(b_idx).is_none() {
            return Err(GraphError::NodeNotFound { id: b });
        }
        if a == b {
            return Err(GraphError::SelfEdge { id: a });
        }
        // find_edge checks both orientations on an undirected graph.
        if self.inner.find_edge(a_idx, b_idx).is_some() {
            return Err(GraphError::DuplicateEdge { a, b });
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(GraphError::WeightOutOfRange { weight });
        }

        let idx = self.inner.add_edge(a_idx, b_idx, weight);
        Ok(EdgeId::from(idx))
    }

    /// Looks up a node mutably, e.g. for the solver's in-place relaxation.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut PathNode> {
        self.inner.node_weight_mut(id.into())
    }

    /// Clears every node's solve state (distance, predecessor, visited).
    pub fn reset_solve_state(&mut self) {
        for node in self.inner.node_weights_mut() {
            node.reset_solve_state();
        }
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Looks up a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&PathNode> {
        self.inner.node_weight(id.into())
    }

    /// Looks up a node ID by label.
    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    /// Returns all node IDs in insertion order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.labels.values().copied().collect()
    }

    /// Returns all node labels in insertion order.
    pub fn node_labels(&self) -> Vec<&str> {
        self.labels.keys().map(String::as_str).collect()
    }

    /// Returns `(neighbor, weight)` pairs incident to a node.
    pub fn neighbors(&self, id: NodeId) -> Vec<(NodeId, u32)> {
        self.inner
            .edges(id.into())
            .map(|edge| (NodeId::from(edge.target()), *edge.weight()))
            .collect()
    }

    /// Returns a node's neighbors as a label -> weight map, for reporting.
    pub fn neighbor_map(&self, id: NodeId) -> IndexMap<String, u32> {
        self.neighbors(id)
            .into_iter()
            .filter_map(|(nid, w)| self.node(nid).map(|n| (n.label.clone(), w)))
            .collect()
    }

    /// Returns the number of edges incident to a node.
    pub fn degree(&self, id: NodeId) -> usize {
        self.inner.edges(id.into()).count()
    }

    /// Returns `true` if an edge exists between the pair (either direction).
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.inner.find_edge(a.into(), b.into()).is_some()
    }

    /// Returns the full edge list as `(a, b, weight)` triples.
    ///
    /// Each undirected edge appears once. This is the visualization-facing
    /// view of the graph structure.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, u32)> {
        self.inner
            .edge_references()
            .map(|edge| {
                (
                    NodeId::from(edge.source()),
                    NodeId::from(edge.target()),
                    *edge.weight(),
                )
            })
            .collect()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns `true` if every node is reachable from every other node.
    ///
    /// Graphs with zero or one node count as connected. On an undirected
    /// graph a single DFS from any node suffices.
    pub fn is_connected(&self) -> bool {
        let mut indices = self.inner.node_indices();
        let Some(first) = indices.next() else {
            return true;
        };
        let mut dfs = Dfs::new(&self.inner, first);
        let mut reached = 0usize;
        while dfs.next(&self.inner).is_some() {
            reached += 1;
        }
        reached == self.inner.node_count()
    }
}
