//! Step records and canonical sequences.

use std::collections::BTreeSet;

use serde::Serialize;

use super::error::{QuizError, QuizResult};
use super::{Algorithm, NodeId};

/// How a node should be shown at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// Already processed.
    Visited,
    /// Discovered, waiting in the frontier.
    InFrontier,
    /// Not discovered yet.
    Unvisited,
}

/// One frame of a canonical run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// The node processed at this step.
    pub current_node: NodeId,
    /// Frontier contents after processing `current_node`, in storage order.
    pub frontier: Vec<NodeId>,
    /// Every node visited so far, including `current_node`.
    pub visited: BTreeSet<NodeId>,
    /// Priority of each frontier entry: h(n) for Greedy, f(n) for A*.
    /// `None` marks a node with no path to the goal.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub priorities: Vec<Option<u32>>,
}

impl StepRecord {
    /// Display status of `node` at this step.
    pub fn status_of(&self, node: NodeId) -> NodeStatus {
        if self.visited.contains(&node) {
            NodeStatus::Visited
        } else if self.frontier.contains(&node) {
            NodeStatus::InFrontier
        } else {
            NodeStatus::Unvisited
        }
    }

    /// Frontier labels joined for display, or "empty".
    pub fn frontier_display(&self) -> String {
        if self.frontier.is_empty() {
            "empty".to_string()
        } else {
            join_nodes(&self.frontier)
        }
    }
}

/// The full canonical run of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    /// Algorithm that produced the run.
    pub algorithm: Algorithm,
    /// Goal node for informed runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<NodeId>,
    /// One record per processed node.
    pub records: Vec<StepRecord>,
}

impl Sequence {
    pub(crate) fn new(algorithm: Algorithm, goal: Option<NodeId>) -> Self {
        Self {
            algorithm,
            goal,
            records: Vec::new(),
        }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no node was processed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.records.get(index)
    }

    /// Record at `index`, or `StepOutOfRange`.
    pub fn step(&self, index: usize) -> QuizResult<&StepRecord> {
        self.records.get(index).ok_or(QuizError::StepOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }

    /// The processed nodes in order.
    pub fn visit_order(&self) -> Vec<NodeId> {
        self.records.iter().map(|r| r.current_node).collect()
    }

    /// True if the last record processed the goal.
    pub fn reached_goal(&self) -> bool {
        match (self.goal, self.records.last()) {
            (Some(goal), Some(last)) => last.current_node == goal,
            _ => false,
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Join node labels with ", ".
pub fn join_nodes<'a>(nodes: impl IntoIterator<Item = &'a NodeId>) -> String {
    nodes
        .into_iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
