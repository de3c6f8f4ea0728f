use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::entry::Entry;
use crate::map::{self, Error, Map};
use crate::validate;
use std::borrow::Borrow;
use std::mem;
use std::ops::Index;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.set(0, 2), Ok(1));
/// assert!(map.set(1, 2).is_err());
///
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct AvlMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> AvlMap<T, U> {
    /// Constructs a new, empty `AvlMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will return
    /// and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let AvlMap {
            ref mut tree,
            ref mut len,
        } = self;
        let new_node = Node::new(key, value);
        match tree::insert(tree, new_node) {
            Some(Entry { key, value }) => Some((key, value)),
            None => {
                *len += 1;
                None
            },
        }
    }

    /// Replaces the value associated with an existing key and returns the old value. If the key
    /// does not exist in the map, the key is returned inside `Error::InvalidArgument`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    /// use balanced_trees::Error;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.set(1, 1), Err(Error::InvalidArgument(1)));
    /// map.insert(1, 1);
    /// assert_eq!(map.set(1, 2), Ok(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn set(&mut self, key: T, value: U) -> map::Result<U, T>
    where
        T: Ord,
    {
        match tree::get_mut(&mut self.tree, &key) {
            Some(entry) => Ok(mem::replace(&mut entry.value, value)),
            None => Err(Error::InvalidArgument(key)),
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let AvlMap {
            ref mut tree,
            ref mut len,
        } = self;
        tree::remove(tree, key).map(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            (key, value)
        })
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree. An empty map has a height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.height(), 0);
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    /// assert_eq!(map.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns `true` if an in-order traversal of the map yields strictly increasing keys.
    pub fn is_bst(&self) -> bool
    where
        T: Ord,
    {
        let keys: Vec<&T> = self.iter().map(|(key, _)| key).collect();
        validate::is_strictly_increasing(&keys)
    }

    /// Returns `true` if the heights of the two child subtrees of every node differ by at most
    /// one and every stored height is consistent with its children.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMapIter<T, U> {
        AvlMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, U> Map<T, U> for AvlMap<T, U>
where
    T: Ord,
{
    fn insert(&mut self, key: T, value: U) -> Option<(T, U)> {
        AvlMap::insert(self, key, value)
    }

    fn set(&mut self, key: T, value: U) -> map::Result<U, T> {
        AvlMap::set(self, key, value)
    }

    fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        AvlMap::get(self, key)
    }

    fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        AvlMap::get_mut(self, key)
    }

    fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        AvlMap::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_bst(&self) -> bool {
        AvlMap::is_bst(self)
    }

    fn is_balanced(&self) -> bool {
        AvlMap::is_balanced(self)
    }
}

impl<T, U> IntoIterator for AvlMap<T, U> {
    type IntoIter = AvlMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a AvlMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = AvlMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct AvlMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for AvlMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

/// An iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct AvlMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for AvlMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

impl<T, U> Default for AvlMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for AvlMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}
