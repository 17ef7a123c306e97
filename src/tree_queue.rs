use std::collections::VecDeque;

use tracing::instrument;

use crate::tree_traits::TreeLike;

/// Breadth-first traversal yielding each node with its depth (root = 1).
/// Each element in the queue is a pair (node, depth).
pub struct LevelOrderIterator<'a, N> {
    queue: VecDeque<(&'a N, usize)>,
}

impl<'a, N: TreeLike> LevelOrderIterator<'a, N> {
    pub fn new(root: &'a N) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((root, 1));
        Self { queue }
    }
}

impl<'a, N: TreeLike> Iterator for LevelOrderIterator<'a, N> {
    type Item = (&'a N, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.queue.pop_front()?;
        for child in node.child_nodes() {
            self.queue.push_back((child, depth + 1));
        }
        Some((node, depth))
    }
}

/// Returns all nodes in level order, root first.
#[instrument(level = "debug", skip(root))]
pub fn bfs<N: TreeLike>(root: &N) -> Vec<&N> {
    LevelOrderIterator::new(root).map(|(node, _)| node).collect()
}

/// Returns the nodes grouped by level, root level first.
#[instrument(level = "debug", skip(root))]
pub fn levels<N: TreeLike>(root: &N) -> Vec<Vec<&N>> {
    let mut levels: Vec<Vec<&N>> = Vec::new();
    for (node, depth) in LevelOrderIterator::new(root) {
        if levels.len() < depth {
            levels.push(Vec::new());
        }
        levels[depth - 1].push(node);
    }
    levels
}
