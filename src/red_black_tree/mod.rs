//! Left-leaning red black tree: a self-balancing binary search tree that uses a color bit on each
//! node to simulate a 2-3 tree, keeping the tree approximately balanced during insertions and
//! deletions.

mod map;
mod node;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
pub use self::node::Color;
