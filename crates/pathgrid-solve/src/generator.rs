//! Random graph generation.
//!
//! [`GraphGenerator`] builds a random connected undirected graph in which
//! every node has degree >= 2 and every edge carries a uniform random weight
//! in `[1, 100]`. Generation runs repeated passes over the node set: each
//! pass gives every node a coin-flip chance to sprout one random edge, and
//! the loop ends only once a full pass confirms the minimum-degree and
//! connectivity conditions.
//!
//! Reproducibility: the generator owns a `ChaCha8Rng`, so the same seed
//! produces the same graph (and the same start-node pick).

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pathgrid_core::{NodeId, WeightedGraph, MAX_WEIGHT, MIN_WEIGHT};

/// Smallest permitted node count.
pub const MIN_NODES: usize = 5;
/// Largest permitted node count.
pub const MAX_NODES: usize = 20;

/// Generates random connected graphs with a min-degree-2 guarantee.
pub struct GraphGenerator {
    rng: ChaCha8Rng,
}

impl GraphGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        GraphGenerator {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        GraphGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates a random connected graph.
    ///
    /// A requested count outside `[MIN_NODES, MAX_NODES]` (or `None`) is
    /// replaced by a uniform random count in that range -- never rejected.
    /// Nodes are labeled `"a"`, `"b"`, ... in creation order.
    pub fn generate(&mut self, requested: Option<usize>) -> WeightedGraph {
        let count = match requested {
            Some(n) if (MIN_NODES..=MAX_NODES).contains(&n) => n,
            _ => self.rng.gen_range(MIN_NODES..=MAX_NODES),
        };

        let mut graph = WeightedGraph::new();
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let label = char::from(b'a' + i as u8).to_string();
            // Labels are distinct by construction, so add_node cannot fail.
            let id = graph
                .add_node(label)
                .unwrap_or_else(|_| unreachable!("sequential labels are unique"));
            ids.push(id);
        }

        let mut passes = 0usize;
        loop {
            passes += 1;
            for &from in &ids {
                if self.rng.gen_bool(0.5) {
                    self.try_random_edge(&mut graph, &ids, from);
                }
            }
            // A pass completes the graph only when both the min-degree and
            // connectivity conditions hold.
            if ids.iter().all(|&id| graph.degree(id) >= 2) && graph.is_connected() {
                break;
            }
        }

        tracing::debug!(
            nodes = count,
            edges = graph.edge_count(),
            passes,
            "graph generated"
        );
        graph
    }

    /// Picks a uniform random start node. `None` for an empty graph.
    pub fn pick_start(&mut self, graph: &WeightedGraph) -> Option<NodeId> {
        let ids = graph.node_ids();
        if ids.is_empty() {
            return None;
        }
        Some(ids[self.rng.gen_range(0..ids.len())])
    }

    /// Attempts to add one random edge from `from`.
    ///
    /// Skipped unless: the random target is a different node, the pair is not
    /// already connected, and neither endpoint has reached the degree cap of
    /// `count - 1` (a node cannot exceed a complete graph's degree).
    fn try_random_edge(&mut self, graph: &mut WeightedGraph, ids: &[NodeId], from: NodeId) {
        let cap = ids.len() - 1;
        if graph.degree(from) >= cap {
            return;
        }
        let target = ids[self.rng.gen_range(0..ids.len())];
        if target == from || graph.has_edge(from, target) || graph.degree(target) >= cap {
            return;
        }
        let weight = self.rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
        // Eligibility was checked above, so add_edge cannot fail.
        graph
            .add_edge(from, target, weight)
            .unwrap_or_else(|_| unreachable!("edge eligibility checked above"));
    }
}

impl Default for GraphGenerator {
    fn default() -> Self {
        GraphGenerator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::GraphError;
    use proptest::prelude::*;

    /// Asserts every generation invariant over a finished graph.
    fn assert_generated_invariants(graph: &WeightedGraph) {
        let n = graph.node_count();
        assert!((MIN_NODES..=MAX_NODES).contains(&n));
        assert!(graph.is_connected());

        for id in graph.node_ids() {
            assert!(graph.degree(id) >= 2, "degree >= 2 must hold");
            // No self edges, and symmetric adjacency with equal weights.
            for (neighbor, weight) in graph.neighbors(id) {
                assert_ne!(neighbor, id);
                let back = graph
                    .neighbors(neighbor)
                    .into_iter()
                    .find(|(other, _)| *other == id);
                assert_eq!(back, Some((id, weight)));
            }
        }

        for (a, b, weight) in graph.edges() {
            assert_ne!(a, b);
            assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&weight));
        }
    }

    #[test]
    fn generates_requested_count_in_range() {
        let mut generator = GraphGenerator::from_seed(7);
        let graph = generator.generate(Some(8));
        assert_eq!(graph.node_count(), 8);
        assert_generated_invariants(&graph);
    }

    #[test]
    fn out_of_range_count_is_randomized_never_used() {
        // Scenario: requesting 3 nodes (below minimum) must yield a count in
        // [5, 20] -- in particular, never 3.
        for seed in 0..20 {
            let mut generator = GraphGenerator::from_seed(seed);
            let graph = generator.generate(Some(3));
            assert!((MIN_NODES..=MAX_NODES).contains(&graph.node_count()));
        }
    }

    #[test]
    fn none_count_is_randomized() {
        let mut generator = GraphGenerator::from_seed(11);
        let graph = generator.generate(None);
        assert!((MIN_NODES..=MAX_NODES).contains(&graph.node_count()));
        assert_generated_invariants(&graph);
    }

    #[test]
    fn oversized_count_is_randomized() {
        let mut generator = GraphGenerator::from_seed(3);
        let graph = generator.generate(Some(500));
        assert!((MIN_NODES..=MAX_NODES).contains(&graph.node_count()));
    }

    #[test]
    fn labels_are_sequential_letters() {
        let mut generator = GraphGenerator::from_seed(42);
        let graph = generator.generate(Some(5));
        assert_eq!(graph.node_labels(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn same_seed_same_graph() {
        let graph_a = GraphGenerator::from_seed(1234).generate(Some(10));
        let graph_b = GraphGenerator::from_seed(1234).generate(Some(10));

        assert_eq!(graph_a.node_count(), graph_b.node_count());
        assert_eq!(graph_a.edge_count(), graph_b.edge_count());
        for id in graph_a.node_ids() {
            assert_eq!(graph_a.neighbor_map(id), graph_b.neighbor_map(id));
        }
    }

    #[test]
    fn pick_start_is_a_graph_node() {
        let mut generator = GraphGenerator::from_seed(9);
        let graph = generator.generate(None);
        let start = generator.pick_start(&graph).unwrap();
        assert!(graph.node(start).is_some());

        let empty = WeightedGraph::new();
        assert_eq!(generator.pick_start(&empty), None);
    }

    #[test]
    fn generated_graph_rejects_duplicate_edges_afterwards() {
        let mut generator = GraphGenerator::from_seed(5);
        let mut graph = generator.generate(Some(6));
        let (a, b, _) = graph.edges()[0];
        assert!(matches!(
            graph.add_edge(a, b, 10),
            Err(GraphError::DuplicateEdge { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn generation_invariants_hold_for_any_seed(
            seed in any::<u64>(),
            requested in proptest::option::of(0usize..64),
        ) {
            let mut generator = GraphGenerator::from_seed(seed);
            let graph = generator.generate(requested);
            assert_generated_invariants(&graph);
            if let Some(n) = requested {
                if (MIN_NODES..=MAX_NODES).contains(&n) {
                    prop_assert_eq!(graph.node_count(), n);
                }
            }
        }
    }
}
