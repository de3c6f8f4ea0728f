//! Ordered maps backed by self-balancing binary search trees.
//!
//! Two balancing strategies are provided behind the common [`Map`] trait:
//!
//! - [`avl_tree::AvlMap`] keeps the heights of the two subtrees of every node within one of each
//!   other using single and double rotations.
//! - [`red_black_tree::RedBlackMap`] is a left-leaning red black tree that simulates a 2-3 tree
//!   with rotations and color flips.
//!
//! The [`words`] module contains the word-frequency workload used to compare the two.

mod entry;
mod validate;
pub mod avl_tree;
pub mod map;
pub mod red_black_tree;
pub mod words;

pub use crate::map::{Error, Map};
