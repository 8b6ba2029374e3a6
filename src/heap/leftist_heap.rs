use crate::error::{Error, Result};
use std::mem;

struct Node<T> {
    item: T,
    npl: usize,
    left: Tree<T>,
    right: Tree<T>,
}

type Tree<T> = Option<Box<Node<T>>>;

// Null path length shifted up by one so that an empty tree has length zero.
fn npl<T>(tree: &Tree<T>) -> usize {
    match *tree {
        Some(ref node) => node.npl,
        None => 0,
    }
}

fn merge<T>(tree_1: Tree<T>, tree_2: Tree<T>) -> Tree<T>
where
    T: Ord,
{
    match (tree_1, tree_2) {
        (None, tree) | (tree, None) => tree,
        (Some(node_1), Some(node_2)) => {
            if node_1.item < node_2.item {
                Some(merge_nodes(node_1, node_2))
            } else {
                Some(merge_nodes(node_2, node_1))
            }
        },
    }
}

// precondition: the root of node_1 is no greater than the root of node_2
fn merge_nodes<T>(mut node_1: Box<Node<T>>, node_2: Box<Node<T>>) -> Box<Node<T>>
where
    T: Ord,
{
    if node_1.left.is_none() {
        node_1.left = Some(node_2);
    } else {
        node_1.right = merge(node_1.right.take(), Some(node_2));
        if npl(&node_1.left) < npl(&node_1.right) {
            let Node { ref mut left, ref mut right, .. } = *node_1;
            mem::swap(left, right);
        }
        node_1.npl = npl(&node_1.right) + 1;
    }
    node_1
}

// Frees a tree with an explicit stack. Descending inserts leave a left path as long as the heap.
fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// A mergeable min-priority queue stored as a leftist tree.
///
/// Every node is no greater than its children, and the null path length of a node's right
/// child never exceeds that of its left child. The rightmost path is therefore the shortest
/// path to a missing child, and merging only walks the right paths of the two trees.
///
/// # Examples
/// ```
/// use classic_collections::heap::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.insert(3);
/// heap.insert(1);
///
/// let mut other = LeftistHeap::new();
/// other.insert(2);
///
/// heap.merge(&mut other);
/// assert!(other.is_empty());
///
/// assert_eq!(heap.delete_min(), Ok(1));
/// assert_eq!(heap.find_min(), Ok(&2));
/// ```
pub struct LeftistHeap<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> LeftistHeap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `LeftistHeap<T>`.
    pub fn new() -> Self {
        LeftistHeap {
            root: None,
            len: 0,
        }
    }

    /// Moves every element of `other` into this heap, leaving `other` empty.
    ///
    /// Both heaps are borrowed mutably, so a heap can never be merged with itself.
    pub fn merge(&mut self, other: &mut Self) {
        self.root = merge(self.root.take(), other.root.take());
        self.len += other.len;
        other.len = 0;
    }

    /// Inserts an element into the heap.
    pub fn insert(&mut self, item: T) {
        let node = Some(Box::new(Node {
            item,
            npl: 1,
            left: None,
            right: None,
        }));
        self.root = merge(node, self.root.take());
        self.len += 1;
    }

    /// Returns a reference to the minimum element of the heap.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the heap is empty.
    pub fn find_min(&self) -> Result<&T> {
        match self.root {
            Some(ref node) => Ok(&node.item),
            None => Err(Error::Underflow),
        }
    }

    /// Removes and returns the minimum element of the heap.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the heap is empty.
    pub fn delete_min(&mut self) -> Result<T> {
        match self.root.take() {
            Some(node) => {
                let Node { item, left, right, .. } = *node;
                self.root = merge(left, right);
                self.len -= 1;
                Ok(item)
            },
            None => Err(Error::Underflow),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the heap, removing all elements.
    pub fn clear(&mut self) {
        clear(&mut self.root);
        self.len = 0;
    }
}

impl<T> Drop for LeftistHeap<T> {
    fn drop(&mut self) {
        clear(&mut self.root);
    }
}

impl<T> Default for LeftistHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
