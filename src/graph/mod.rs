//! The fixed tree and the traversal-sequence generators that run on it.

pub mod builder;
pub mod heuristic;
pub mod informed;
pub mod traversal;
pub mod tree_graph;

pub use builder::GraphBuilder;
pub use heuristic::{distance, heuristic, heuristic_table};
pub use informed::{astar_sequence, greedy_sequence, path_costs};
pub use traversal::{bfs_sequence, dfs_sequence};
pub use tree_graph::TreeGraph;
