//! All data types for the traversal quiz library.

pub mod algorithm;
pub mod error;
pub mod node;
pub mod step;

pub use algorithm::Algorithm;
pub use error::{QuizError, QuizResult};
pub use node::NodeId;
pub use step::{join_nodes, NodeStatus, Sequence, StepRecord};

use node::const_node;

/// Root of the default tree.
pub const DEFAULT_ROOT: NodeId = const_node('A');

/// Goal node used by the heuristic for Greedy and A*.
pub const DEFAULT_GOAL: NodeId = const_node('F');

/// Number of quiz levels, one per algorithm.
pub const LEVEL_COUNT: u8 = 4;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
