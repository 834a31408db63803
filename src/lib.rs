//! Traversal quiz — step-by-step graph traversal engine and answer grader.
//!
//! Generates the canonical frontier/visited evolution of BFS, DFS, Greedy
//! Best-First and A* on a fixed seven-node tree, and grades a learner's
//! reproduction of each step with algorithm-specific order leniency.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    generate_sequence, grade, grade_submission, normalize_label, parse_frontier, AnswerRecord,
    GradeResult, Progress, QuizSession, SequenceEngine, SequenceParams, Submission,
    ORDER_MISMATCH_NOTE,
};
pub use graph::{
    astar_sequence, bfs_sequence, dfs_sequence, distance, greedy_sequence, heuristic,
    heuristic_table, path_costs, GraphBuilder, TreeGraph,
};
pub use types::{
    now_micros, Algorithm, NodeId, NodeStatus, QuizError, QuizResult, Sequence, StepRecord,
    DEFAULT_GOAL, DEFAULT_ROOT, LEVEL_COUNT,
};
