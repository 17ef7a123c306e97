//! Numeric trees for teaching and reference: a generic multi-child [`Tree`],
//! an ordered [`BinaryTree`], and the traversals both share.
//!
//! ```
//! use numtree::{BinaryTree, Tree};
//!
//! let root = Tree::with_children(1.0, Tree::make_children(&[2.0, 3.0]));
//! assert_eq!(
//!     Tree::value_vector(&Tree::dfs(&root)),
//!     vec![Some(2.0), Some(3.0), Some(1.0)]
//! );
//! assert_eq!(
//!     Tree::value_vector(&Tree::bfs(&root)),
//!     vec![Some(1.0), Some(2.0), Some(3.0)]
//! );
//!
//! let btree: BinaryTree = [4.5, 1.3, 6.5, 9.0, 8.1].into_iter().collect();
//! assert_eq!(btree.sorted_values(), vec![1.3, 4.5, 6.5, 8.1, 9.0]);
//! ```

pub mod binary_tree;
pub mod config;
pub mod errors;
pub mod traversal;
pub mod tree;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use crate::binary_tree::{BinaryTree, SearchStrategy};
pub use crate::config::Settings;
pub use crate::errors::{TreeError, TreeResult};
pub use crate::traversal::LoopType;
pub use crate::tree::Tree;
pub use crate::tree_traits::{TreeLike, TreeNodeConvert};
