use crate::avl_tree::node::Node;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

//       node              child
//      /    \            /     \
//     a    child  ->   node     c
//         /     \     /    \
//        b       c   a      b
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

//         node          child
//        /    \        /     \
//     child    c  ->  a      node
//    /     \                /    \
//   a       b              b      c
fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the height of the root of `tree` and applies at most one of the four rotation cases.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        // LR reduces to LL by rotating the left child first.
        if let Some(child) = node.left.take() {
            if child.balance_factor() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if balance_factor < -1 {
        // RL reduces to RR by rotating the right child first.
        if let Some(child) = node.right.take() {
            if child.balance_factor() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let min_node = match tree {
        Some(ref mut node) if node.left.is_some() => Some(remove_min(&mut node.left)),
        Some(_) => None,
        None => unreachable!(),
    };

    match min_node {
        Some(min_node) => {
            balance(tree);
            min_node
        },
        None => {
            let mut node = tree.take().expect("Expected a non-empty tree.");
            *tree = node.right.take();
            node
        },
    }
}

// Joins the two subtrees of a removed node, promoting the successor to be their new root.
fn combine_subtrees<T, U>(left_tree: Tree<T, U>, mut right_tree: Tree<T, U>) -> Tree<T, U> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
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

    balance(tree);
    ret
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.entry.key.borrow()) {
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
                let Node {
                    entry, left, right, ..
                } = *node;
                *tree = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, right) => combine_subtrees(left, right),
                };
                Some(entry)
            },
        },
        None => return None,
    };

    balance(tree);
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

// Every node has a balance factor in [-1, 1] and a height consistent with its children.
pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            let expected_height = cmp::max(height(&node.left), height(&node.right)) + 1;
            node.height == expected_height
                && node.balance_factor().abs() <= 1
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        },
    }
}
