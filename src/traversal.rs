//! Traversal entry points shared by every `TreeLike` node type.
//!
//! DFS emits postorder with the root last: for each child (left to right)
//! the child's full subtree, then the node itself. BFS is classic level order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::TreeError;
use crate::tree_queue;
use crate::tree_stack;
use crate::tree_traits::TreeLike;

/// Whether an algorithm runs recursively or with an explicit stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopType {
    #[default]
    Recursive,
    Iterative,
}

impl fmt::Display for LoopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopType::Recursive => write!(f, "recursive"),
            LoopType::Iterative => write!(f, "iterative"),
        }
    }
}

impl FromStr for LoopType {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(LoopType::Recursive),
            "iterative" => Ok(LoopType::Iterative),
            other => Err(TreeError::config(format!(
                "unknown dfs method '{other}', expected 'recursive' or 'iterative'"
            ))),
        }
    }
}

/// Depth-first search, root last. Walks with an explicit stack, so the depth
/// of `root` is bounded by memory rather than by the call stack.
pub fn dfs<N: TreeLike>(root: &N) -> Vec<&N> {
    dfs_with(root, LoopType::Iterative)
}

#[instrument(level = "debug", skip(root))]
pub fn dfs_with<N: TreeLike>(root: &N, method: LoopType) -> Vec<&N> {
    match method {
        LoopType::Recursive => {
            let mut nodes = Vec::new();
            collect_postorder(root, &mut nodes);
            nodes
        }
        LoopType::Iterative => tree_stack::dfs_iterative(root),
    }
}

fn collect_postorder<'a, N: TreeLike>(node: &'a N, nodes: &mut Vec<&'a N>) {
    for child in node.child_nodes() {
        collect_postorder(child, nodes);
    }
    nodes.push(node);
}

/// Breadth-first search, root first.
pub fn bfs<N: TreeLike>(root: &N) -> Vec<&N> {
    tree_queue::bfs(root)
}

/// Values of `nodes`, in the same order.
pub fn value_vector<N: TreeLike>(nodes: &[&N]) -> Vec<Option<f64>> {
    nodes.iter().map(|node| node.value()).collect()
}

/// Number of levels below and including `root`; a leaf has depth 1.
pub fn depth<N: TreeLike>(root: &N) -> usize {
    tree_stack::depth(root)
}

/// Values of all leaves, in DFS order.
pub fn leaf_values<N: TreeLike>(root: &N) -> Vec<Option<f64>> {
    tree_stack::PostOrderIterator::new(root)
        .filter(|node| node.is_leaf())
        .map(|node| node.value())
        .collect()
}
