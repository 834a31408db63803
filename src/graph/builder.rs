//! Fluent API for building TreeGraph instances.

use crate::types::{NodeId, QuizError, QuizResult};

use super::TreeGraph;

/// Fluent builder for constructing a TreeGraph.
pub struct GraphBuilder {
    root: Option<NodeId>,
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            root: None,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a node. The first node declared becomes the root unless `root` is called.
    pub fn add_node(&mut self, node: NodeId) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Add a parent -> child edge.
    pub fn link(&mut self, parent: NodeId, child: NodeId) -> &mut Self {
        self.edges.push((parent, child));
        self
    }

    /// Set the root explicitly.
    pub fn root(&mut self, root: NodeId) -> &mut Self {
        self.root = Some(root);
        self
    }

    /// Validate and build the final TreeGraph.
    pub fn build(self) -> QuizResult<TreeGraph> {
        let root = match self.root.or_else(|| self.nodes.first().copied()) {
            Some(root) => root,
            None => return Err(QuizError::EmptyGraph),
        };
        TreeGraph::from_parts(root, self.nodes, self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
