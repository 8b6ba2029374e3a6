//! Unbalanced binary search tree.

mod node;
mod set;
mod tree;

pub use self::set::{BinarySearchTree, BinarySearchTreeIntoIter, BinarySearchTreeIter};
