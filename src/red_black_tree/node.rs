use crate::entry::Entry;
use crate::red_black_tree::tree;
use std::mem;

/// The color of the link from a node to its parent. The link to an empty subtree is black.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // The right child takes the place of this node and inherits its color. The demoted node
    // becomes red.
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    // Both the left child and its left child are red.
    pub fn has_red_left_chain(&self) -> bool {
        match self.left {
            Some(ref child) => child.is_red() && tree::is_red(&child.left),
            None => false,
        }
    }

    // Restores the left-leaning invariants at this node on the way back up the tree.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        if self.has_red_left_chain() {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    // Assuming this node is red and both `self.left` and `self.left.left` are black, makes
    // `self.left` or one of its children red.
    pub fn shift_left(&mut self) {
        self.flip_colors();
        if let Some(mut child) = self.right.take() {
            if tree::is_red(&child.left) {
                child.rotate_right();
                self.right = Some(child);
                self.rotate_left();
                self.flip_colors();
            } else {
                self.right = Some(child);
            }
        }
    }

    // Assuming this node is red and both `self.right` and `self.right.left` are black, makes
    // `self.right` or one of its children red.
    pub fn shift_right(&mut self) {
        self.flip_colors();
        let should_rotate = match self.left {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if should_rotate {
            self.rotate_right();
            self.flip_colors();
        }
    }
}
