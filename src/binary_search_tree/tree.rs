use crate::binary_search_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let mut node = tree.take()?;
    if node.left.is_none() {
        *tree = node.right.take();
        return Some(node);
    }

    let min = remove_min(&mut node.left);
    *tree = Some(node);
    min
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            true
        },
    }
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    match tree.take() {
        Some(mut node) => {
            let ret = match key.cmp(&node.key) {
                Ordering::Less => remove(&mut node.left, key),
                Ordering::Greater => remove(&mut node.right, key),
                Ordering::Equal => {
                    if node.left.is_some() && node.right.is_some() {
                        // replace the key with its in-order successor
                        let successor = match remove_min(&mut node.right) {
                            Some(successor) => successor,
                            None => unreachable!(),
                        };
                        Some(mem::replace(&mut node.key, successor.key))
                    } else {
                        let Node { key: removed, left, right } = *node;
                        *tree = left.or(right);
                        return Some(removed);
                    }
                },
            };
            *tree = Some(node);
            ret
        },
        None => None,
    }
}

// Frees a tree with an explicit stack. Sorted inserts leave a path as long as the tree.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
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
