use tracing::{instrument, trace};

use crate::traversal::{self, LoopType};
use crate::tree_traits::TreeLike;

/// A general multi-child tree for numeric data.
///
/// Each node owns its children outright; dropping a node drops its whole
/// subtree. A node without children always holds an empty vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    value: Option<f64>,
    children: Vec<Tree>,
}

/*
Ownership of children:
`set_children` and `take_children` move the previous children out of the
node and hand them back to the caller, who is then responsible for them
(shallow release). Dropping them, or calling `clear_children`, releases the
whole subtree (deep release).

Traversals (`dfs`, `bfs`) return borrowed `&Tree` views into the tree, never
copies, so a traversal result cannot outlive the tree it was taken from.
 */
impl Tree {
    /// Leaf node with a value.
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Leaf node without a value.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_children(value: impl Into<Option<f64>>, children: Vec<Tree>) -> Self {
        Self {
            value: value.into(),
            children,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = Some(value);
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Tree] {
        &mut self.children
    }

    pub fn n_children(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Replaces the children wholesale and returns the previous ones.
    #[instrument(level = "trace", skip_all, fields(n_new = children.len()))]
    pub fn set_children(&mut self, children: Vec<Tree>) -> Vec<Tree> {
        std::mem::replace(&mut self.children, children)
    }

    pub fn push_child(&mut self, child: Tree) {
        self.children.push(child);
    }

    /// Detaches the direct children, leaving this node a leaf.
    pub fn take_children(&mut self) -> Vec<Tree> {
        std::mem::take(&mut self.children)
    }

    /// Drops every child subtree.
    pub fn clear_children(&mut self) {
        trace!("Releasing {} child subtrees", self.children.len());
        self.children.clear();
    }

    /// Creates one leaf per value, in input order. The leaves are not
    /// attached to any parent.
    pub fn make_children(values: &[f64]) -> Vec<Tree> {
        values.iter().map(|&v| Tree::new(v)).collect()
    }

    /// Depth-first search: every child subtree (left to right), then `root`.
    /// Uses an explicit stack; see [`Tree::dfs_with`] for the recursive walk.
    pub fn dfs(root: &Tree) -> Vec<&Tree> {
        traversal::dfs(root)
    }

    pub fn dfs_with(root: &Tree, method: LoopType) -> Vec<&Tree> {
        traversal::dfs_with(root, method)
    }

    /// Breadth-first search: level order, `root` first.
    pub fn bfs(root: &Tree) -> Vec<&Tree> {
        traversal::bfs(root)
    }

    pub fn value_vector(nodes: &[&Tree]) -> Vec<Option<f64>> {
        traversal::value_vector(nodes)
    }

    pub fn depth(&self) -> usize {
        traversal::depth(self)
    }

    pub fn leaf_values(&self) -> Vec<Option<f64>> {
        traversal::leaf_values(self)
    }
}

impl TreeLike for Tree {
    fn value(&self) -> Option<f64> {
        self.value
    }

    fn child_nodes(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }
}

// Subtrees are released from an explicit stack so that dropping a deep chain
// does not recurse once per level.
impl Drop for Tree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
