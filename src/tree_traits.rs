/*
Both node types share the traversal algorithms through `TreeLike`:
a node only has to expose its value and its ordered, non-absent children.
Absent slots (binary trees) are filtered out before an algorithm sees them,
so DFS/BFS never have to special-case them.
 */
use termtree::Tree;
use tracing::instrument;

use crate::config::RenderSettings;

pub trait TreeLike {
    /// Node value, `None` while the node is unset.
    fn value(&self) -> Option<f64>;

    /// Direct children in slot order, absent slots skipped.
    fn child_nodes(&self) -> Vec<&Self>;

    fn is_leaf(&self) -> bool {
        self.child_nodes().is_empty()
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String> {
        self.to_tree_string_with(&RenderSettings::default())
    }

    fn to_tree_string_with(&self, render: &RenderSettings) -> Tree<String>;
}

impl<T: TreeLike> TreeNodeConvert for T {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string_with(&self, render: &RenderSettings) -> Tree<String> {
        // The root of the Tree<String> is the formatted value of the node
        let root = render.format_value(self.value());

        // Recursively construct the children
        let leaves: Vec<_> = self
            .child_nodes()
            .into_iter()
            .map(|c| c.to_tree_string_with(render))
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
