//! A binary tree whose nodes link back to their parent, with four restartable,
//! non-recursive traversals (pre-order, in-order, post-order and level-order)
//! driven by the `Stack` and `Queue` containers of this crate.
//!
//! ```
//! use binary_tree_traversal::{Tree, TreeIterator};
//!
//! let mut tree: Tree<i32> = vec![3, 5, 1, 15].into_iter().collect();
//! tree.insert(9);
//! assert_eq!(tree.level_order().to_vec(&tree), vec![3, 5, 1, 15, 9]);
//! assert_eq!(tree.in_order().to_vec(&tree), vec![15, 5, 9, 3, 1]);
//!
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.level_order().to_vec(&tree), vec![3, 9, 1, 15]);
//! ```

#[cfg(test)]
mod tests;

pub mod error;
pub mod iter;
pub mod linear;
pub mod tree;

#[cfg(feature = "generator")]
pub mod generator;

pub use error::ContainerError;
pub use iter::{InOrder, LevelOrder, PostOrder, PreOrder, TreeIterator};
pub use linear::{Container, Queue, Stack};
pub use tree::{NodeId, NodeMut, NodeRef, Side, Tree};
