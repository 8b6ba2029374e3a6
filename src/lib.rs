//! Classic in-memory data structures: hash sets with three collision strategies, three
//! min-priority queues, two binary search trees, and a set of in-place sorting functions.
//!
//! Every structure is single-threaded and owns its elements. Hash sets require `Hash + Eq`
//! elements (or a custom `HashFamily` for cuckoo hashing), and the heaps, trees, and sorting
//! functions require `Ord` elements. Operations that need a minimum or maximum return
//! `Error::Underflow` on an empty structure.

#[macro_use]
extern crate log;

pub mod avl_tree;
pub mod binary_search_tree;
mod error;
pub mod hash_table;
pub mod heap;
pub mod sort;

pub use crate::error::{Error, Result};
