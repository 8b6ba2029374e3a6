use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    tree.as_ref().map_or(0, |node| node.height)
}

fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match *tree {
        Some(ref node) => height(&node.left) as i32 - height(&node.right) as i32,
        None => 0,
    }
}

// Lifts the left child into the place of the root.
fn rotate_with_left_child<T>(tree: &mut Tree<T>) {
    if let Some(mut root) = tree.take() {
        *tree = match root.left.take() {
            Some(mut pivot) => {
                root.left = pivot.right.take();
                root.fix_height();
                pivot.right = Some(root);
                pivot.fix_height();
                Some(pivot)
            },
            None => Some(root),
        };
    }
}

// Lifts the right child into the place of the root.
fn rotate_with_right_child<T>(tree: &mut Tree<T>) {
    if let Some(mut root) = tree.take() {
        *tree = match root.right.take() {
            Some(mut pivot) => {
                root.right = pivot.left.take();
                root.fix_height();
                pivot.left = Some(root);
                pivot.fix_height();
                Some(pivot)
            },
            None => Some(root),
        };
    }
}

// Refreshes the height of the root and, if its subtrees differ in height by two, applies a
// single or double rotation. Both subtrees must already be balanced.
fn rebalance<T>(tree: &mut Tree<T>) {
    match *tree {
        Some(ref mut node) => node.fix_height(),
        None => return,
    }

    let factor = balance_factor(tree);
    if factor > 1 {
        if let Some(ref mut node) = *tree {
            if balance_factor(&node.left) < 0 {
                rotate_with_right_child(&mut node.left);
            }
        }
        rotate_with_left_child(tree);
    } else if factor < -1 {
        if let Some(ref mut node) = *tree {
            if balance_factor(&node.right) > 0 {
                rotate_with_left_child(&mut node.right);
            }
        }
        rotate_with_right_child(tree);
    }
}

fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let mut node = tree.take()?;
    if node.left.is_none() {
        *tree = node.right.take();
        return Some(node);
    }

    let min = remove_min(&mut node.left);
    *tree = Some(node);
    rebalance(tree);
    min
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    rebalance(tree);
    ret
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // replace the key with its in-order successor
                    let successor = match remove_min(&mut node.right) {
                        Some(successor) => successor,
                        None => unreachable!(),
                    };
                    let removed = mem::replace(&mut node.key, successor.key);
                    *tree = Some(node);
                    Some(removed)
                } else {
                    let Node { key: removed, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(removed)
                }
            },
        },
        None => return None,
    };

    rebalance(tree);
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}
