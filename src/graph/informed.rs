//! Heuristic-guided traversals (Greedy Best-First, A*) that stop at the goal.

use std::collections::{BTreeSet, HashMap};

use crate::types::{Algorithm, NodeId, Sequence, StepRecord};

use super::heuristic::heuristic_map;
use super::TreeGraph;

/// Priority queue kept as a vector and stable-sorted by key.
///
/// Equal keys keep insertion order. `None` (no path to goal) sorts last.
#[derive(Debug, Default)]
struct PriorityFrontier {
    entries: Vec<(NodeId, Option<u32>)>,
}

impl PriorityFrontier {
    fn push(&mut self, node: NodeId, priority: Option<u32>) {
        self.entries.push((node, priority));
    }

    fn contains(&self, node: NodeId) -> bool {
        self.entries.iter().any(|&(n, _)| n == node)
    }

    fn remove(&mut self, node: NodeId) {
        self.entries.retain(|&(n, _)| n != node);
    }

    fn sort(&mut self) {
        self.entries.sort_by_key(|&(_, p)| (p.is_none(), p));
    }

    /// Sort, then take the lowest-priority entry.
    fn pop_min(&mut self) -> Option<NodeId> {
        if self.entries.is_empty() {
            return None;
        }
        self.sort();
        Some(self.entries.remove(0).0)
    }

    fn record(&self, current: NodeId, visited: &BTreeSet<NodeId>) -> StepRecord {
        StepRecord {
            current_node: current,
            frontier: self.entries.iter().map(|&(n, _)| n).collect(),
            visited: visited.clone(),
            priorities: self.entries.iter().map(|&(_, p)| p).collect(),
        }
    }
}

fn goal_record(current: NodeId, visited: &BTreeSet<NodeId>) -> StepRecord {
    StepRecord {
        current_node: current,
        frontier: Vec::new(),
        visited: visited.clone(),
        priorities: Vec::new(),
    }
}

/// Greedy best-first search from `start` toward `goal`, ordered by h(n).
///
/// The goal is checked before expansion, so its record has an empty frontier
/// and nothing is discovered past it.
pub fn greedy_sequence(graph: &TreeGraph, start: NodeId, goal: NodeId) -> Sequence {
    let h = heuristic_map(graph, goal);
    let h_of = |n: NodeId| h.get(&n).copied().flatten();

    let mut sequence = Sequence::new(Algorithm::Greedy, Some(goal));
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut frontier = PriorityFrontier::default();
    frontier.push(start, h_of(start));

    while let Some(current) = frontier.pop_min() {
        if !visited.insert(current) {
            continue;
        }

        if current == goal {
            sequence.records.push(goal_record(current, &visited));
            break;
        }

        for &neighbor in graph.neighbors(current) {
            if !visited.contains(&neighbor) && !frontier.contains(neighbor) {
                frontier.push(neighbor, h_of(neighbor));
            }
        }

        frontier.sort();
        log::trace!("greedy: visit {} frontier={:?}", current, frontier.entries);
        sequence.records.push(frontier.record(current, &visited));
    }

    log::debug!(
        "greedy {} -> {}: {} steps, reached={}",
        start,
        goal,
        sequence.len(),
        sequence.reached_goal()
    );
    sequence
}

/// A* search from `start` toward `goal`, ordered by f(n) = g(n) + h(n).
///
/// Every edge costs 1. A neighbor whose path cost improves has its stale
/// frontier entry replaced by a fresh one at the back.
pub fn astar_sequence(graph: &TreeGraph, start: NodeId, goal: NodeId) -> Sequence {
    let h = heuristic_map(graph, goal);
    let h_of = |n: NodeId| h.get(&n).copied().flatten();

    let mut sequence = Sequence::new(Algorithm::AStar, Some(goal));
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut g_cost: HashMap<NodeId, u32> = HashMap::from([(start, 0)]);
    let mut frontier = PriorityFrontier::default();
    frontier.push(start, h_of(start));

    while let Some(current) = frontier.pop_min() {
        if !visited.insert(current) {
            continue;
        }

        if current == goal {
            sequence.records.push(goal_record(current, &visited));
            break;
        }

        let g_current = g_cost.get(&current).copied().unwrap_or(0);
        for &neighbor in graph.neighbors(current) {
            if visited.contains(&neighbor) {
                continue;
            }
            let candidate = g_current + 1;
            let improves = g_cost
                .get(&neighbor)
                .is_none_or(|&known| candidate < known);
            if improves {
                g_cost.insert(neighbor, candidate);
                frontier.remove(neighbor);
                frontier.push(neighbor, h_of(neighbor).map(|h| candidate + h));
            }
        }

        frontier.sort();
        log::trace!("astar: visit {} frontier={:?}", current, frontier.entries);
        sequence.records.push(frontier.record(current, &visited));
    }

    log::debug!(
        "astar {} -> {}: {} steps, reached={}",
        start,
        goal,
        sequence.len(),
        sequence.reached_goal()
    );
    sequence
}

/// g(n) for every node A* would assign when run to exhaustion from `start`.
///
/// On a tree this is the depth below `start`; exposed so learners can check f(n).
pub fn path_costs(graph: &TreeGraph, start: NodeId) -> Vec<(NodeId, Option<u32>)> {
    graph
        .nodes()
        .iter()
        .map(|&n| (n, super::heuristic::distance(start, n, graph)))
        .collect()
}
