//! Error types for the traversal quiz library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the traversal quiz library.
///
/// Learner mistakes are never errors: a wrong submission is reported through
/// [`GradeResult`](crate::engine::GradeResult). The variants here describe
/// caller defects (bad selector, malformed graph, out-of-range index) and I/O.
#[derive(Error, Debug)]
pub enum QuizError {
    /// Algorithm selector did not name one of the four algorithms.
    #[error("Unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Quiz level outside `1..=LEVEL_COUNT`.
    #[error("Level {0} out of range (expected 1-4)")]
    LevelOutOfRange(u8),

    /// Node label is not part of the graph.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// Label could not be parsed as a node identifier.
    #[error("Invalid node label: {0:?}")]
    InvalidLabel(String),

    /// Graph has no nodes.
    #[error("Graph has no nodes")]
    EmptyGraph,

    /// Node declared twice.
    #[error("Duplicate node {0}")]
    DuplicateNode(NodeId),

    /// Edge declared twice.
    #[error("Duplicate edge {0} -> {1}")]
    DuplicateEdge(NodeId, NodeId),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on node {0}")]
    SelfEdge(NodeId),

    /// Edge set does not form a tree rooted at the declared root.
    #[error("Graph is not a tree rooted at {root}: {reason}")]
    NotATree { root: NodeId, reason: String },

    /// Step index past the end of a sequence.
    #[error("Step {index} out of range (sequence has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// Submission after the final level was completed.
    #[error("Quiz session already finished")]
    SessionFinished,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for traversal quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;
