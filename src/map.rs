//! The ordered map contract shared by every balanced tree in this crate.

use std::borrow::Borrow;
use std::error;
use std::fmt;
use std::result;

/// Errors returned by fallible map operations.
#[derive(Debug, PartialEq)]
pub enum Error<T> {
    /// The key passed to `set` does not exist in the map. The key is handed back to the caller.
    InvalidArgument(T),
}

impl<T> Error<T> {
    /// Consumes the error and returns the key that caused it.
    pub fn into_key(self) -> T {
        match self {
            Error::InvalidArgument(key) => key,
        }
    }
}

impl<T> fmt::Display for Error<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(key) => write!(f, "{:?} doesn't exist", key),
        }
    }
}

impl<T> error::Error for Error<T> where T: fmt::Debug {}

pub type Result<R, T> = result::Result<R, Error<T>>;

/// An ordered map from keys of type `T` to values of type `U`.
///
/// Both `AvlMap` and `RedBlackMap` implement this trait so that callers can be written once and
/// run against either balancing strategy.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlMap;
/// use balanced_trees::red_black_tree::RedBlackMap;
/// use balanced_trees::Map;
///
/// fn fill<M: Map<u32, u32>>(map: &mut M) {
///     for i in 0..10 {
///         map.insert(i, i * i);
///     }
/// }
///
/// let mut avl = AvlMap::new();
/// let mut red_black = RedBlackMap::new();
/// fill(&mut avl);
/// fill(&mut red_black);
///
/// assert_eq!(Map::get(&avl, &3), Some(&9));
/// assert_eq!(Map::get(&red_black, &3), Some(&9));
/// ```
pub trait Map<T, U> {
    /// Inserts a key-value pair, returning the replaced pair if the key already existed.
    fn insert(&mut self, key: T, value: U) -> Option<(T, U)>;

    /// Replaces the value of an existing key and returns the old value. Fails with
    /// `Error::InvalidArgument` if the key does not exist.
    fn set(&mut self, key: T, value: U) -> Result<U, T>;

    fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized;

    fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized;

    fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes a key, returning the removed pair if it existed.
    fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an in-order traversal yields strictly increasing keys.
    fn is_bst(&self) -> bool;

    /// Returns `true` if the tree satisfies the balance invariant of its strategy.
    fn is_balanced(&self) -> bool;
}
