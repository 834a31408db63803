//! Shortest-path distance to the goal, used as the admissible heuristic h(n).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::NodeId;

use super::TreeGraph;

/// Unweighted hop count from `start` to `goal`.
///
/// Returns `Some(0)` when `start == goal` and `None` when no path exists
/// (including when either node is absent from the graph).
pub fn distance(start: NodeId, goal: NodeId, graph: &TreeGraph) -> Option<u32> {
    if start == goal {
        return graph.contains(start).then_some(0);
    }

    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::from([(start, 0)]);

    while let Some((node, dist)) = queue.pop_front() {
        for &next in graph.neighbors(node) {
            if next == goal {
                return Some(dist + 1);
            }
            if visited.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }

    None
}

/// h(node): exact hop distance to `goal`. Never overestimates on unit-cost edges.
pub fn heuristic(node: NodeId, graph: &TreeGraph, goal: NodeId) -> Option<u32> {
    distance(node, goal, graph)
}

/// h(n) for every node, in declaration order.
pub fn heuristic_table(graph: &TreeGraph, goal: NodeId) -> Vec<(NodeId, Option<u32>)> {
    graph
        .nodes()
        .iter()
        .map(|&n| (n, heuristic(n, graph, goal)))
        .collect()
}

/// h(n) keyed by node, computed once per generator run.
pub(crate) fn heuristic_map(graph: &TreeGraph, goal: NodeId) -> HashMap<NodeId, Option<u32>> {
    heuristic_table(graph, goal).into_iter().collect()
}
