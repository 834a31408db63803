//! Sequence generation — dispatch from an algorithm selector to its generator.

use crate::graph::{astar_sequence, bfs_sequence, dfs_sequence, greedy_sequence, TreeGraph};
use crate::types::{Algorithm, NodeId, QuizResult, Sequence, DEFAULT_GOAL};

/// Parameters for generating one canonical run.
#[derive(Debug, Clone, Copy)]
pub struct SequenceParams {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Node the traversal starts from.
    pub start: NodeId,
    /// Goal for Greedy and A*; ignored by BFS and DFS.
    pub goal: NodeId,
}

impl SequenceParams {
    /// Run `algorithm` from the graph root toward the default goal.
    pub fn for_graph(algorithm: Algorithm, graph: &TreeGraph) -> Self {
        Self {
            algorithm,
            start: graph.root(),
            goal: DEFAULT_GOAL,
        }
    }
}

/// Produces canonical step sequences. Stateless; every call starts fresh.
pub struct SequenceEngine;

impl SequenceEngine {
    /// Create a new sequence engine.
    pub fn new() -> Self {
        Self
    }

    /// Generate the canonical run described by `params`.
    pub fn generate(&self, graph: &TreeGraph, params: SequenceParams) -> QuizResult<Sequence> {
        graph.require(params.start)?;
        if params.algorithm.is_informed() {
            graph.require(params.goal)?;
        }

        let sequence = match params.algorithm {
            Algorithm::Bfs => bfs_sequence(graph, params.start),
            Algorithm::Dfs => dfs_sequence(graph, params.start),
            Algorithm::Greedy => greedy_sequence(graph, params.start, params.goal),
            Algorithm::AStar => astar_sequence(graph, params.start, params.goal),
        };
        Ok(sequence)
    }

    /// Generate one run per algorithm, in level order.
    pub fn generate_all(&self, graph: &TreeGraph, goal: NodeId) -> QuizResult<Vec<Sequence>> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                self.generate(
                    graph,
                    SequenceParams {
                        algorithm,
                        start: graph.root(),
                        goal,
                    },
                )
            })
            .collect()
    }
}

impl Default for SequenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical run of `algorithm` from the graph root toward `DEFAULT_GOAL`.
pub fn generate_sequence(algorithm: Algorithm, graph: &TreeGraph) -> QuizResult<Sequence> {
    SequenceEngine::new().generate(graph, SequenceParams::for_graph(algorithm, graph))
}
