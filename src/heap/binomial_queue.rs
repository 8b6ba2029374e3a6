use crate::error::{Error, Result};
use std::cmp;

struct Node<T> {
    item: T,
    left_child: Tree<T>,
    next_sibling: Tree<T>,
}

type Tree<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Node {
            item,
            left_child: None,
            next_sibling: None,
        }
    }
}

// Links two binomial trees of the same order. The tree with the larger root becomes the
// leftmost child of the other.
fn combine_trees<T>(mut tree_1: Box<Node<T>>, mut tree_2: Box<Node<T>>) -> Box<Node<T>>
where
    T: Ord,
{
    if tree_1.item > tree_2.item {
        return combine_trees(tree_2, tree_1);
    }
    tree_2.next_sibling = tree_1.left_child.take();
    tree_1.left_child = Some(tree_2);
    tree_1
}

/// A mergeable min-priority queue made of a forest of binomial trees.
///
/// The tree in slot `i`, if present, has exactly `2^i` nodes, so the occupied slots match the
/// set bits of the queue's length. Merging two queues combines their forests the way binary
/// addition combines digits, carrying a tree of the next order whenever two trees of the same
/// order meet.
///
/// # Examples
/// ```
/// use classic_collections::heap::BinomialQueue;
///
/// let mut queue = BinomialQueue::new();
/// queue.insert(3);
/// queue.insert(1);
///
/// let mut other = BinomialQueue::new();
/// other.insert(2);
///
/// queue.merge(&mut other);
/// assert!(other.is_empty());
///
/// assert_eq!(queue.delete_min(), Ok(1));
/// assert_eq!(queue.delete_min(), Ok(2));
/// assert_eq!(queue.delete_min(), Ok(3));
/// ```
pub struct BinomialQueue<T> {
    trees: Vec<Tree<T>>,
    len: usize,
}

impl<T> BinomialQueue<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinomialQueue<T>`.
    pub fn new() -> Self {
        BinomialQueue {
            trees: vec![None],
            len: 0,
        }
    }

    fn singleton(item: T) -> Self {
        BinomialQueue {
            trees: vec![Some(Box::new(Node::new(item)))],
            len: 1,
        }
    }

    fn expand_trees(&mut self, new_len: usize) {
        while self.trees.len() < new_len {
            self.trees.push(None);
        }
    }

    /// Moves every element of `other` into this queue, leaving `other` empty.
    ///
    /// Both queues are borrowed mutably, so a queue can never be merged with itself.
    pub fn merge(&mut self, other: &mut Self) {
        self.len += other.len;
        if self.len > self.capacity() {
            let new_len = cmp::max(self.trees.len(), other.trees.len()) + 1;
            self.expand_trees(new_len);
        }

        let mut carry = None;
        let mut index = 0;
        let mut order_size = 1;
        while order_size <= self.len {
            let tree_1 = self.trees[index].take();
            let tree_2 = match other.trees.get_mut(index) {
                Some(tree) => tree.take(),
                None => None,
            };

            match (tree_1, tree_2, carry.take()) {
                (None, None, None) => {},
                (Some(tree), None, None) | (None, Some(tree), None) | (None, None, Some(tree)) => {
                    self.trees[index] = Some(tree);
                },
                (Some(tree_1), Some(tree_2), None)
                | (Some(tree_1), None, Some(tree_2))
                | (None, Some(tree_1), Some(tree_2)) => {
                    carry = Some(combine_trees(tree_1, tree_2));
                },
                (Some(tree_1), Some(tree_2), Some(tree_3)) => {
                    self.trees[index] = Some(tree_3);
                    carry = Some(combine_trees(tree_1, tree_2));
                },
            }

            index += 1;
            order_size *= 2;
        }

        for tree in &mut other.trees {
            *tree = None;
        }
        other.len = 0;
    }

    /// Inserts an element into the queue.
    pub fn insert(&mut self, item: T) {
        self.merge(&mut Self::singleton(item));
    }

    // precondition: the queue is not empty
    fn find_min_index(&self) -> usize {
        let mut min: Option<(usize, &T)> = None;
        for (index, tree) in self.trees.iter().enumerate() {
            if let Some(ref node) = *tree {
                let is_smaller = match min {
                    Some((_, min_item)) => node.item < *min_item,
                    None => true,
                };
                if is_smaller {
                    min = Some((index, &node.item));
                }
            }
        }

        match min {
            Some((min_index, _)) => min_index,
            None => unreachable!(),
        }
    }

    /// Returns a reference to the minimum element of the queue.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the queue is empty.
    pub fn find_min(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        match self.trees[self.find_min_index()] {
            Some(ref node) => Ok(&node.item),
            None => unreachable!(),
        }
    }

    /// Removes and returns the minimum element of the queue.
    ///
    /// The children of the removed root form a queue of their own, which is merged back in.
    ///
    /// # Errors
    /// Returns `Error::Underflow` if the queue is empty.
    pub fn delete_min(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        let min_index = self.find_min_index();
        let Node { item, left_child, .. } = match self.trees[min_index].take() {
            Some(node) => *node,
            None => unreachable!(),
        };

        // the children have orders min_index - 1 down to 0
        let mut deleted_queue = BinomialQueue {
            trees: (0..cmp::max(min_index, 1)).map(|_| None).collect(),
            len: (1 << min_index) - 1,
        };
        let mut index = min_index;
        let mut child = left_child;
        while let Some(mut node) = child {
            child = node.next_sibling.take();
            index -= 1;
            deleted_queue.trees[index] = Some(node);
        }

        self.len -= deleted_queue.len + 1;
        self.merge(&mut deleted_queue);
        Ok(item)
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the queue can hold without adding a tree slot.
    pub fn capacity(&self) -> usize {
        1usize
            .checked_shl(self.trees.len() as u32)
            .map_or(usize::max_value(), |size| size - 1)
    }

    /// Clears the queue, removing all elements.
    pub fn clear(&mut self) {
        for tree in &mut self.trees {
            *tree = None;
        }
        self.len = 0;
    }
}

impl<T> Default for BinomialQueue<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
