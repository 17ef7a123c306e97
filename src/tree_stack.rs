use tracing::instrument;

use crate::tree_traits::TreeLike;

/*
Stack based tree algorithms.

The postorder iterator mimics the call stack of the recursive DFS with an
explicit stack of (node, visited) pairs:
- first visit: push the node back marked visited, then its children in
  reverse so the leftmost child is popped first
- second visit: all descendants have been emitted, emit the node itself
 */

pub struct PostOrderIterator<'a, N> {
    stack: Vec<(&'a N, bool)>,
}

impl<'a, N: TreeLike> PostOrderIterator<'a, N> {
    pub fn new(root: &'a N) -> Self {
        Self {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, N: TreeLike> Iterator for PostOrderIterator<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            for child in node.child_nodes().into_iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Non-recursive DFS, same order as the recursive one (root last).
#[instrument(level = "trace", skip(root))]
pub fn dfs_iterative<N: TreeLike>(root: &N) -> Vec<&N> {
    PostOrderIterator::new(root).collect()
}

/// Tree depth using an explicit stack of (node, depth) pairs.
#[instrument(level = "trace", skip(root))]
pub fn depth<N: TreeLike>(root: &N) -> usize {
    let mut max_depth = 0;
    let mut stack = vec![(root, 1)]; // (node, depth)

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            max_depth = depth;
        }
        for child in node.child_nodes() {
            stack.push((child, depth + 1));
        }
    }

    max_depth
}
