use std::cmp::Ordering;

use tracing::{instrument, trace};

use crate::errors::{TreeError, TreeResult};
use crate::traversal;
use crate::tree_stack::PostOrderIterator;
use crate::tree_traits::TreeLike;

/// How `BinaryTree::search` decides what counts as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Only the node holding the value itself
    #[default]
    Exact,
    /// Nearest upper bound: smallest stored value `>=` the target
    FromAbove,
    /// Nearest lower bound: largest stored value `<=` the target
    FromBelow,
}

/// Binary search tree for numeric data.
///
/// Slot 0 is `left`, slot 1 is `right`; either may be absent. Once populated,
/// every value in a left subtree is strictly less than its parent's value and
/// every value in a right subtree strictly greater. Duplicates are not stored.
///
/// A node starts either set or unset. An unset node receives its value from
/// the first `insert` that reaches it and never becomes unset again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryTree {
    value: Option<f64>,
    left: Option<Box<BinaryTree>>,
    right: Option<Box<BinaryTree>>,
}

impl BinaryTree {
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            left: None,
            right: None,
        }
    }

    /// Unset node, the placeholder insertion descends into.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_children(
        value: impl Into<Option<f64>>,
        left: Option<BinaryTree>,
        right: Option<BinaryTree>,
    ) -> Self {
        Self {
            value: value.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Builds a node from a generic child list, which must hold exactly the
    /// two slots `[left, right]`.
    pub fn from_slots(
        value: impl Into<Option<f64>>,
        slots: Vec<Option<BinaryTree>>,
    ) -> TreeResult<Self> {
        if slots.len() != 2 {
            return Err(TreeError::ChildCount {
                expected: 2,
                found: slots.len(),
            });
        }
        let mut slots = slots.into_iter();
        let left = slots.next().flatten();
        let right = slots.next().flatten();
        Ok(Self::with_children(value, left, right))
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn left(&self) -> Option<&BinaryTree> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&BinaryTree> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut BinaryTree> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut BinaryTree> {
        self.right.as_deref_mut()
    }

    /// Replaces the left slot only; returns its previous occupant.
    pub fn set_left(&mut self, node: impl Into<Option<BinaryTree>>) -> Option<BinaryTree> {
        std::mem::replace(&mut self.left, node.into().map(Box::new)).map(|old| *old)
    }

    /// Replaces the right slot only; returns its previous occupant.
    pub fn set_right(&mut self, node: impl Into<Option<BinaryTree>>) -> Option<BinaryTree> {
        std::mem::replace(&mut self.right, node.into().map(Box::new)).map(|old| *old)
    }

    /// Inserts `value` and returns the node that now holds it.
    ///
    /// Inserting a value that is already present leaves the tree unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN, which has no place in the ordering. Use
    /// [`BinaryTree::try_insert`] to get an error instead.
    pub fn insert(&mut self, value: f64) -> &mut BinaryTree {
        assert!(!value.is_nan(), "NaN cannot be inserted into a BinaryTree");
        self.insert_ordered(value)
    }

    pub fn try_insert(&mut self, value: f64) -> TreeResult<&mut BinaryTree> {
        if value.is_nan() {
            return Err(TreeError::NotANumber);
        }
        Ok(self.insert_ordered(value))
    }

    #[instrument(level = "trace", skip(self))]
    fn insert_ordered(&mut self, value: f64) -> &mut BinaryTree {
        let mut node = self;
        loop {
            let current = match node.value {
                None => {
                    node.value = Some(value);
                    return node;
                }
                Some(current) => current,
            };
            let slot = match value.partial_cmp(&current) {
                Some(Ordering::Less) => &mut node.left,
                Some(Ordering::Greater) => &mut node.right,
                _ => {
                    trace!("Value {} already present", value);
                    return node;
                }
            };
            if slot.is_none() {
                trace!("Creating placeholder below {}", current);
            }
            node = &mut **slot.get_or_insert_with(|| Box::new(BinaryTree::empty()));
        }
    }

    /// All set values in ascending order (in-order walk).
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut values = Vec::new();
        let mut stack: Vec<&BinaryTree> = Vec::new();
        let mut current = Some(self);

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            if let Some(node) = stack.pop() {
                if let Some(v) = node.value {
                    values.push(v);
                }
                current = node.right();
            }
        }

        values
    }

    /// Finds the node matching `value` under `strategy`, or `None`.
    ///
    /// Descent stops at the first unset node; an unset root matches nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, value: f64, strategy: SearchStrategy) -> Option<&BinaryTree> {
        if value.is_nan() {
            return None;
        }
        let mut node = Some(self);
        // closest bound seen so far; each one found further down is tighter
        let mut candidate: Option<&BinaryTree> = None;

        while let Some(current) = node {
            let Some(current_value) = current.value else {
                break;
            };
            if value == current_value {
                return Some(current);
            }
            if value < current_value {
                if strategy == SearchStrategy::FromAbove {
                    candidate = Some(current);
                }
                node = current.left();
            } else {
                if strategy == SearchStrategy::FromBelow {
                    candidate = Some(current);
                }
                node = current.right();
            }
        }

        match strategy {
            SearchStrategy::Exact => None,
            SearchStrategy::FromAbove | SearchStrategy::FromBelow => candidate,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.search(value, SearchStrategy::Exact).is_some()
    }

    /// Number of set values stored in the tree.
    pub fn len(&self) -> usize {
        PostOrderIterator::new(self)
            .filter(|node| node.is_set())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dfs(root: &BinaryTree) -> Vec<&BinaryTree> {
        traversal::dfs(root)
    }

    pub fn bfs(root: &BinaryTree) -> Vec<&BinaryTree> {
        traversal::bfs(root)
    }

    pub fn value_vector(nodes: &[&BinaryTree]) -> Vec<Option<f64>> {
        traversal::value_vector(nodes)
    }

    pub fn depth(&self) -> usize {
        traversal::depth(self)
    }
}

impl TreeLike for BinaryTree {
    fn value(&self) -> Option<f64> {
        self.value
    }

    fn child_nodes(&self) -> Vec<&Self> {
        [self.left(), self.right()].into_iter().flatten().collect()
    }
}

// Subtrees are released from an explicit stack so that dropping a degenerate
// chain does not recurse once per level.
impl Drop for BinaryTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<BinaryTree>> =
            [self.left.take(), self.right.take()].into_iter().flatten().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Extend<f64> for BinaryTree {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<f64> for BinaryTree {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut tree = BinaryTree::empty();
        tree.extend(iter);
        tree
    }
}
