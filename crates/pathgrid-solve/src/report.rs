//! Serializable output contracts for reporting and visualization consumers.
//!
//! A [`SolveReport`] carries everything an external renderer needs without
//! recomputation: per-node results (label, distance, predecessor, neighbor
//! map), the full edge list, the start label, and an optional highlighted
//! shortest path. An unreachable distance serializes as JSON `null`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use pathgrid_core::{NodeId, WeightedGraph};

use crate::error::SolveError;
use crate::solver::path_to;

/// Per-node solve result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeReport {
    /// The node's label.
    pub label: String,
    /// Shortest distance from the start, or `None` if unreachable.
    pub distance: Option<u32>,
    /// Label of the predecessor on the shortest path, or `None`.
    pub predecessor: Option<String>,
    /// Neighbor label -> edge weight.
    pub neighbors: IndexMap<String, u32>,
}

/// One undirected edge, by endpoint labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub a: String,
    pub b: String,
    pub weight: u32,
}

/// The full result of one generate-then-solve cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Label of the start node.
    pub start: String,
    /// Per-node results, in node insertion order.
    pub nodes: Vec<NodeReport>,
    /// Full edge list, for visualization.
    pub edges: Vec<EdgeReport>,
    /// Shortest path to a chosen end node, ordered from the end node back
    /// to the start (the order the predecessor chain produces).
    pub highlighted_path: Option<Vec<String>>,
}

impl SolveReport {
    /// Builds a report from a solved graph. Errors if `start` is missing.
    pub fn from_graph(graph: &WeightedGraph, start: NodeId) -> Result<Self, SolveError> {
        let start_label = graph
            .node(start)
            .ok_or(SolveError::NodeNotFound { id: start })?
            .label
            .clone();

        let label_of = |id: NodeId| graph.node(id).map(|n| n.label.clone());

        let nodes = graph
            .node_ids()
            .into_iter()
            .filter_map(|id| {
                let node = graph.node(id)?;
                Some(NodeReport {
                    label: node.label.clone(),
                    distance: node.distance,
                    predecessor: node.predecessor.and_then(|p| label_of(p)),
                    neighbors: graph.neighbor_map(id),
                })
            })
            .collect();

        let edges = graph
            .edges()
            .into_iter()
            .filter_map(|(a, b, weight)| {
                Some(EdgeReport {
                    a: label_of(a)?,
                    b: label_of(b)?,
                    weight,
                })
            })
            .collect();

        Ok(SolveReport {
            start: start_label,
            nodes,
            edges,
            highlighted_path: None,
        })
    }

    /// Attaches the shortest path to the node with `end_label`.
    ///
    /// Errors if the label is unknown or the node was not reached; both are
    /// validation failures the caller must surface before rendering.
    pub fn with_path_to(
        mut self,
        graph: &WeightedGraph,
        start: NodeId,
        end_label: &str,
    ) -> Result<Self, SolveError> {
        let end = graph
            .node_by_label(end_label)
            .ok_or_else(|| SolveError::UnknownLabel {
                label: end_label.to_string(),
            })?;
        let path = path_to(graph, start, end)?;
        self.highlighted_path = Some(
            path.into_iter()
                .filter_map(|id| graph.node(id).map(|n| n.label.clone()))
                .collect(),
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn solved_line() -> (WeightedGraph, NodeId) {
        // a -- b (3) -- c (4), plus isolated d.
        let mut graph = WeightedGraph::new();
        let a = graph.add_node("a").unwrap();
        let b = graph.add_node("b").unwrap();
        let c = graph.add_node("c").unwrap();
        graph.add_node("d").unwrap();
        graph.add_edge(a, b, 3).unwrap();
        graph.add_edge(b, c, 4).unwrap();
        solve(&mut graph, a).unwrap();
        (graph, a)
    }

    #[test]
    fn report_carries_per_node_results() {
        let (graph, start) = solved_line();
        let report = SolveReport::from_graph(&graph, start).unwrap();

        assert_eq!(report.start, "a");
        assert_eq!(report.nodes.len(), 4);
        assert_eq!(report.edges.len(), 2);
        assert_eq!(report.highlighted_path, None);

        let by_label = |label: &str| {
            report
                .nodes
                .iter()
                .find(|n| n.label == label)
                .unwrap()
                .clone()
        };
        assert_eq!(by_label("a").distance, Some(0));
        assert_eq!(by_label("c").distance, Some(7));
        assert_eq!(by_label("c").predecessor, Some("b".to_string()));
        assert_eq!(by_label("d").distance, None);
        assert_eq!(by_label("d").predecessor, None);
        assert_eq!(by_label("b").neighbors.get("c"), Some(&4));
    }

    #[test]
    fn highlighted_path_runs_end_to_start() {
        let (graph, start) = solved_line();
        let report = SolveReport::from_graph(&graph, start)
            .unwrap()
            .with_path_to(&graph, start, "c")
            .unwrap();

        assert_eq!(
            report.highlighted_path,
            Some(vec!["c".to_string(), "b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn unknown_path_label_is_rejected() {
        let (graph, start) = solved_line();
        let result = SolveReport::from_graph(&graph, start)
            .unwrap()
            .with_path_to(&graph, start, "zz");
        assert!(matches!(result, Err(SolveError::UnknownLabel { label }) if label == "zz"));
    }

    #[test]
    fn unreachable_path_target_is_rejected() {
        let (graph, start) = solved_line();
        let result = SolveReport::from_graph(&graph, start)
            .unwrap()
            .with_path_to(&graph, start, "d");
        assert!(matches!(result, Err(SolveError::Unreachable { label }) if label == "d"));
    }

    #[test]
    fn unreachable_distance_serializes_as_null() {
        let (graph, start) = solved_line();
        let report = SolveReport::from_graph(&graph, start).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        let d = json["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .find(|n| n["label"] == "d")
            .unwrap();
        assert!(d["distance"].is_null());

        // Round-trip preserves the report.
        let back: SolveReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
