use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// An empty subtree is black.
pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.is_red(),
    }
}

// A non-empty subtree whose root and root's left child are both black has to borrow a red link
// before the deletion can descend into it.
fn should_shift<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => !node.is_red() && !is_red(&node.left),
    }
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let min_node = match tree {
        Some(ref mut node) if node.left.is_some() => {
            if should_shift(&node.left) {
                node.shift_left();
            }
            let ret = remove_min(&mut node.left);
            node.balance();
            Some(ret)
        },
        Some(_) => None,
        None => unreachable!(),
    };

    match min_node {
        Some(min_node) => min_node,
        None => {
            let mut node = tree.take().expect("Expected a non-empty tree.");
            *tree = node.right.take();
            node
        },
    }
}

// Joins the two subtrees of a removed node, promoting the successor to be their new root with
// the color of the removed node.
fn combine_subtrees<T, U>(
    left_tree: Tree<T, U>,
    mut right_tree: Tree<T, U>,
    color: Color,
) -> Tree<T, U> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    new_root.color = color;
    Some(new_root)
}

// Makes the root red when both of its children are black so that `remove` always descends with
// a red link available.
pub fn fix_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => {
                let Node { ref mut entry, .. } = &mut **node;
                return Some(mem::replace(entry, new_node.entry));
            },
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        node.balance();
    }
    ret
}

// precondition: the key exists in the tree and the root of the tree or one of its children is red
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => {
            if key.cmp(node.entry.key.borrow()) == Ordering::Less {
                if should_shift(&node.left) {
                    node.shift_left();
                }

                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            } else {
                if is_red(&node.left) {
                    node.rotate_right();
                }

                if key.cmp(node.entry.key.borrow()) == Ordering::Equal && node.right.is_none() {
                    assert!(node.left.is_none());
                    return Some(node.entry);
                }

                if should_shift(&node.right) {
                    node.shift_right();
                }

                if key.cmp(node.entry.key.borrow()) == Ordering::Equal {
                    let Node {
                        entry,
                        left,
                        right,
                        color,
                    } = *node;
                    *tree = combine_subtrees(left, right, color);
                    Some(entry)
                } else {
                    let ret = remove(&mut node.right, key);
                    *tree = Some(node);
                    ret
                }
            }
        },
        None => return None,
    };

    if let Some(ref mut node) = tree {
        node.balance();
    }
    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => get_mut(&mut node.left, key),
        Ordering::Greater => get_mut(&mut node.right, key),
        Ordering::Equal => Some(&mut node.entry),
    })
}

/// Returns the number of black links on every path from the root of `tree` to an empty subtree.
/// Returns `None` if the paths disagree, if a red link leans right, or if two red links are
/// consecutive.
pub fn black_height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
    match tree {
        None => Some(0),
        Some(ref node) => {
            if is_red(&node.right) || (node.is_red() && is_red(&node.left)) {
                return None;
            }
            let left_height = black_height(&node.left)?;
            let right_height = black_height(&node.right)?;
            if left_height != right_height {
                return None;
            }
            match node.color {
                Color::Red => Some(left_height),
                Color::Black => Some(left_height + 1),
            }
        },
    }
}
