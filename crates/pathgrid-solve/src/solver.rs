//! Single-source shortest paths by iterative relaxation.
//!
//! This is Dijkstra's algorithm without a priority queue: an explicit loop
//! keeps a pool of unsettled nodes and selects the next node by a linear
//! scan for the minimum finite distance. Ties are broken by pool position
//! (first encountered wins) -- deterministic but arbitrary, so callers must
//! not rely on a specific tie resolution.
//!
//! The solver mutates node state (`distance`, `predecessor`, `visited`) in
//! place and performs no I/O. It is total over any graph with the model's
//! non-negative weights: a remainder disconnected from the start is a normal
//! outcome, left at the `None` distance sentinel.

use pathgrid_core::{NodeId, WeightedGraph};

use crate::error::SolveError;

/// Computes shortest distances and predecessors from `start` for every
/// reachable node, in place.
///
/// Any prior solve state is reset first, so re-solving with the same start
/// is idempotent. Errors only if `start` is not in the graph.
pub fn solve(graph: &mut WeightedGraph, start: NodeId) -> Result<(), SolveError> {
    if graph.node(start).is_none() {
        return Err(SolveError::NodeNotFound { id: start });
    }

    graph.reset_solve_state();
    if let Some(node) = graph.node_mut(start) {
        node.distance = Some(0);
    }

    // The unsettled pool: every node except the start, in insertion order.
    // Pool order is the tie-break for equal-distance candidates.
    let mut unsettled: Vec<NodeId> = graph
        .node_ids()
        .into_iter()
        .filter(|&id| id != start)
        .collect();

    let mut current = start;
    loop {
        relax_neighbors(graph, current);
        if let Some(node) = graph.node_mut(current) {
            node.visited = true;
        }

        if unsettled.is_empty() {
            break;
        }
        match select_next(graph, &unsettled) {
            Some(pos) => current = unsettled.remove(pos),
            // No unsettled node has a finite distance: the rest of the graph
            // is disconnected from the start.
            None => break,
        }
    }

    let settled = graph
        .node_ids()
        .into_iter()
        .filter(|&id| graph.node(id).map_or(false, |n| n.visited))
        .count();
    tracing::debug!(start = %start, settled, "solve complete");
    Ok(())
}

/// Applies one relaxation round: every non-visited neighbor of `current`
/// whose best-known distance exceeds `current.distance + weight` (or is
/// still unknown) gets the new distance and `current` as predecessor.
fn relax_neighbors(graph: &mut WeightedGraph, current: NodeId) {
    let Some(current_distance) = graph.node(current).and_then(|n| n.distance) else {
        return;
    };
    for (neighbor, weight) in graph.neighbors(current) {
        let Some(node) = graph.node_mut(neighbor) else {
            continue;
        };
        if node.visited {
            continue;
        }
        let candidate = current_distance + weight;
        match node.distance {
            Some(existing) if existing <= candidate => {}
            _ => {
                node.distance = Some(candidate);
                node.predecessor = Some(current);
            }
        }
    }
}

/// Returns the pool position of the unsettled node with the minimum finite
/// distance, or `None` if no unsettled node has been reached yet.
fn select_next(graph: &WeightedGraph, unsettled: &[NodeId]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (pos, &id) in unsettled.iter().enumerate() {
        let Some(distance) = graph.node(id).and_then(|n| n.distance) else {
            continue;
        };
        match best {
            // Strict comparison keeps the first-encountered candidate on ties.
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((pos, distance)),
        }
    }
    best.map(|(pos, _)| pos)
}

/// Extracts the shortest path to `end` by following predecessor links.
///
/// The returned sequence runs from `end` back to `start`, the order the
/// predecessor chain produces. Errors if either node is missing or if `end`
/// was not reached by the solve.
pub fn path_to(
    graph: &WeightedGraph,
    start: NodeId,
    end: NodeId,
) -> Result<Vec<NodeId>, SolveError> {
    if graph.node(start).is_none() {
        return Err(SolveError::NodeNotFound { id: start });
    }
    let end_node = graph.node(end).ok_or(SolveError::NodeNotFound { id: end })?;
    if end_node.distance.is_none() {
        return Err(SolveError::Unreachable {
            label: end_node.label.clone(),
        });
    }

    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        let pred = graph
            .node(cursor)
            .and_then(|n| n.predecessor)
            .ok_or_else(|| SolveError::Unreachable {
                label: end_node.label.clone(),
            })?;
        path.push(pred);
        cursor = pred;
        if path.len() > graph.node_count() {
            return Err(SolveError::PredecessorCycle {
                label: end_node.label.clone(),
            });
        }
    }
    Ok(path)
}
