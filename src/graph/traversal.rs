//! Uninformed traversals (BFS, DFS) recorded step by step.

use std::collections::{BTreeSet, VecDeque};

use crate::types::{Algorithm, NodeId, Sequence, StepRecord};

use super::TreeGraph;

/// Breadth-first traversal from `start`, one record per dequeued node.
///
/// Neighbors already visited or already waiting in the queue are not enqueued
/// again. The frontier snapshot is the queue front-to-back.
pub fn bfs_sequence(graph: &TreeGraph, start: NodeId) -> Sequence {
    let mut sequence = Sequence::new(Algorithm::Bfs, None);
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }

        for &neighbor in graph.neighbors(current) {
            if !visited.contains(&neighbor) && !queue.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }

        log::trace!("bfs: visit {} queue={:?}", current, queue);
        sequence.records.push(StepRecord {
            current_node: current,
            frontier: queue.iter().copied().collect(),
            visited: visited.clone(),
            priorities: Vec::new(),
        });
    }

    log::debug!("bfs from {}: {} steps", start, sequence.len());
    sequence
}

/// Depth-first traversal from `start`, one record per popped node.
///
/// Neighbors are pushed in reverse declared order so the leftmost child is
/// popped first. The frontier snapshot is the stack bottom-to-top.
pub fn dfs_sequence(graph: &TreeGraph, start: NodeId) -> Sequence {
    let mut sequence = Sequence::new(Algorithm::Dfs, None);
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut stack: Vec<NodeId> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        for &neighbor in graph.neighbors(current).iter().rev() {
            if !visited.contains(&neighbor) && !stack.contains(&neighbor) {
                stack.push(neighbor);
            }
        }

        log::trace!("dfs: visit {} stack={:?}", current, stack);
        sequence.records.push(StepRecord {
            current_node: current,
            frontier: stack.clone(),
            visited: visited.clone(),
            priorities: Vec::new(),
        });
    }

    log::debug!("dfs from {}: {} steps", start, sequence.len());
    sequence
}
