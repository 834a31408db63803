//! The fixed tree the quiz is played on.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::node::const_node;
use crate::types::{NodeId, QuizError, QuizResult, DEFAULT_ROOT};

/// An immutable rooted tree with ordered adjacency lists.
///
/// Each undirected edge is recorded on both endpoints in declaration order,
/// so a child lists its parent first when the parent edge was declared first.
#[derive(Debug, Clone)]
pub struct TreeGraph {
    /// Nodes in declaration order.
    nodes: Vec<NodeId>,
    /// Declared (parent, child) edges.
    edges: Vec<(NodeId, NodeId)>,
    /// Node -> neighbors in insertion order.
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    /// Distinguished root.
    root: NodeId,
}

impl TreeGraph {
    /// The seven-node tree: A -> {B, C}, B -> {D, E}, C -> {F, G}.
    pub fn default_tree() -> Self {
        let [a, b, c, d, e, f, g] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'].map(const_node);
        Self::assemble(
            DEFAULT_ROOT,
            vec![a, b, c, d, e, f, g],
            vec![(a, b), (a, c), (b, d), (b, e), (c, f), (c, g)],
        )
    }

    /// Validate and build a tree from its parts (used by the builder).
    pub fn from_parts(
        root: NodeId,
        nodes: Vec<NodeId>,
        edges: Vec<(NodeId, NodeId)>,
    ) -> QuizResult<Self> {
        if nodes.is_empty() {
            return Err(QuizError::EmptyGraph);
        }

        let mut known: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
        for &node in &nodes {
            if !known.insert(node) {
                return Err(QuizError::DuplicateNode(node));
            }
        }
        if !known.contains(&root) {
            return Err(QuizError::NodeNotFound(root));
        }

        let mut seen_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
        for &(parent, child) in &edges {
            if parent == child {
                return Err(QuizError::SelfEdge(parent));
            }
            for endpoint in [parent, child] {
                if !known.contains(&endpoint) {
                    return Err(QuizError::NodeNotFound(endpoint));
                }
            }
            let key = if parent < child {
                (parent, child)
            } else {
                (child, parent)
            };
            if !seen_edges.insert(key) {
                return Err(QuizError::DuplicateEdge(parent, child));
            }
        }

        if edges.len() + 1 != nodes.len() {
            return Err(QuizError::NotATree {
                root,
                reason: format!(
                    "expected {} edges for {} nodes, found {}",
                    nodes.len() - 1,
                    nodes.len(),
                    edges.len()
                ),
            });
        }

        let graph = Self::assemble(root, nodes, edges);

        // n - 1 edges and fully connected implies acyclic
        let reached = graph.reachable_from_root();
        if let Some(&orphan) = graph.nodes.iter().find(|n| !reached.contains(n)) {
            return Err(QuizError::NotATree {
                root,
                reason: format!("node {} is unreachable", orphan),
            });
        }

        Ok(graph)
    }

    fn assemble(root: NodeId, nodes: Vec<NodeId>, edges: Vec<(NodeId, NodeId)>) -> Self {
        let mut adjacency: HashMap<NodeId, Vec<NodeId>> =
            nodes.iter().map(|&n| (n, Vec::new())).collect();
        for &(parent, child) in &edges {
            adjacency.entry(parent).or_default().push(child);
            adjacency.entry(child).or_default().push(parent);
        }
        Self {
            nodes,
            edges,
            adjacency,
            root,
        }
    }

    fn reachable_from_root(&self) -> HashSet<NodeId> {
        let mut seen = HashSet::from([self.root]);
        let mut queue = VecDeque::from([self.root]);
        while let Some(node) = queue.pop_front() {
            for &next in self.neighbors(node) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Declared (parent, child) edges.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Neighbors of `node` in insertion order. Empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(&node)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `node` belongs to the graph.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Check that `node` belongs to the graph.
    pub fn require(&self, node: NodeId) -> QuizResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(QuizError::NodeNotFound(node))
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Hop distance from the root, or None for unknown nodes.
    pub fn depth_of(&self, node: NodeId) -> Option<u32> {
        super::heuristic::distance(self.root, node, self)
    }
}

impl Default for TreeGraph {
    fn default() -> Self {
        Self::default_tree()
    }
}
