use crate::binary_search_tree::node::Node;
use crate::binary_search_tree::tree;
use crate::error::{Error, Result};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Every key in the left subtree of a node is less than the node's key, and every key in the
/// right subtree is greater. No rebalancing is done, so inserting keys in sorted order produces
/// a tree whose depth equals its length.
///
/// # Examples
/// ```
/// use classic_collections::binary_search_tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(5);
/// tree.insert(2);
/// tree.insert(8);
///
/// assert_eq!(tree.find_min(), Ok(&2));
/// assert_eq!(tree.find_max(), Ok(&8));
///
/// assert_eq!(tree.remove(&5), Some(5));
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&2, &8]);
/// ```
pub struct BinarySearchTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>`.
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Inserts a key into the tree. Returns `false` and leaves the tree unchanged if an equal
    /// key already exists.
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the tree, returning the stored key if it existed.
    ///
    /// A node with two children takes the key of its in-order successor, which is then removed
    /// from the right subtree.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.root, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the tree.
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the minimum key of the tree.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the tree is empty.
    pub fn find_min(&self) -> Result<&T> {
        tree::min(&self.root).ok_or(Error::Underflow)
    }

    /// Returns the maximum key of the tree.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the tree is empty.
    pub fn find_max(&self) -> Result<&T> {
        tree::max(&self.root).ok_or(Error::Underflow)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
        self.len = 0;
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> BinarySearchTreeIter<'_, T> {
        BinarySearchTreeIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;
    type IntoIter = BinarySearchTreeIntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = BinarySearchTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the keys of the tree in-order and yields owned keys.
pub struct BinarySearchTreeIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for BinarySearchTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right;
            node.key
        })
    }
}

impl<T> Drop for BinarySearchTreeIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for node in &mut self.stack {
            tree::clear(&mut node.right);
        }
    }
}

/// An iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the keys of the tree in-order and yields immutable references.
pub struct BinarySearchTreeIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for BinarySearchTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
