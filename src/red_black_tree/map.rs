use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use crate::entry::Entry;
use crate::map::{self, Error, Map};
use crate::validate;
use std::borrow::Borrow;
use std::mem;
use std::ops::Index;

/// An ordered map implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree where every node is colored red or
/// black. The left-leaning variant only allows red links to lean left, which makes each tree
/// correspond to a 2-3 tree: every path from the root to an empty subtree passes through the same
/// number of black links and no path has two red links in a row. The height of the tree is
/// therefore at most twice the logarithm of the number of keys.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
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
pub struct RedBlackMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will return
    /// and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let RedBlackMap {
            ref mut tree,
            ref mut len,
        } = self;
        let new_node = Node::new(key, value);
        let ret = match tree::insert(tree, new_node) {
            Some(Entry { key, value }) => Some((key, value)),
            None => {
                *len += 1;
                None
            },
        };
        tree::blacken_root(tree);
        ret
    }

    /// Replaces the value associated with an existing key and returns the old value. If the key
    /// does not exist in the map, the key is returned inside `Error::InvalidArgument`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    /// use balanced_trees::Error;
    ///
    /// let mut map = RedBlackMap::new();
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
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            return None;
        }

        let RedBlackMap {
            ref mut tree,
            ref mut len,
        } = self;
        tree::fix_root(tree);
        let ret = tree::remove(tree, key).map(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            (key, value)
        });
        tree::blacken_root(tree);
        ret
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
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
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
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
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
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
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
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
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
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
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of black links on every path from the root to an empty subtree, or
    /// `None` if the red black invariants do not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.black_height(), Some(0));
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    /// assert_eq!(map.black_height(), Some(2));
    /// ```
    pub fn black_height(&self) -> Option<usize> {
        tree::black_height(&self.tree)
    }

    /// Returns `true` if an in-order traversal of the map yields strictly increasing keys.
    pub fn is_bst(&self) -> bool
    where
        T: Ord,
    {
        let keys: Vec<&T> = self.iter().map(|(key, _)| key).collect();
        validate::is_strictly_increasing(&keys)
    }

    /// Returns `true` if the root is black, every red link leans left, no two red links are
    /// consecutive, and every path from the root to an empty subtree has the same number of black
    /// links.
    pub fn is_balanced(&self) -> bool {
        !tree::is_red(&self.tree) && self.black_height().is_some()
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<T, U> {
        RedBlackMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, U> Map<T, U> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn insert(&mut self, key: T, value: U) -> Option<(T, U)> {
        RedBlackMap::insert(self, key, value)
    }

    fn set(&mut self, key: T, value: U) -> map::Result<U, T> {
        RedBlackMap::set(self, key, value)
    }

    fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackMap::get(self, key)
    }

    fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackMap::get_mut(self, key)
    }

    fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackMap::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_bst(&self) -> bool {
        RedBlackMap::is_bst(self)
    }

    fn is_balanced(&self) -> bool {
        RedBlackMap::is_balanced(self)
    }
}

impl<T, U> IntoIterator for RedBlackMap<T, U> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
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

/// An iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U>
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

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::map::Error;
    use crate::red_black_tree::node::Color;
    use crate::red_black_tree::tree::Tree;

    // Pre-order (key, color) pairs describing the shape of the tree.
    fn shape<T: Copy, U>(tree: &Tree<T, U>, ret: &mut Vec<(T, Color)>) {
        if let Some(ref node) = tree {
            ret.push((node.entry.key, node.color));
            shape(&node.left, ret);
            shape(&node.right, ret);
        }
    }

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
        assert!(map.is_bst());
        assert!(map.is_balanced());
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        let ret_1 = map.insert(1, 1);
        let ret_2 = map.insert(1, 3);
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(ret_1, None);
        assert_eq!(ret_2, Some((1, 1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_same_value_keeps_shape() {
        let mut map = RedBlackMap::new();
        for key in &[5, 3, 8, 1, 4, 7, 9, 2] {
            map.insert(*key, *key * 10);
        }
        let mut before = Vec::new();
        shape(&map.tree, &mut before);

        map.insert(3, 30);

        let mut after = Vec::new();
        shape(&map.tree, &mut after);
        assert_eq!(before, after);
        assert_eq!(map.len(), 8);
    }

    #[test]
    fn test_root_is_black() {
        let mut map = RedBlackMap::new();
        map.insert("b", 0);
        map.insert("a", 0);
        map.insert("c", 0);

        let root = map.tree.as_ref().unwrap();
        assert_eq!(root.entry.key, "b");
        assert_eq!(root.color, Color::Black);
        assert!(map.is_balanced());
    }

    #[test]
    fn test_set() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.set(1, 2), Ok(1));
        assert_eq!(map.get(&1), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_set_empty() {
        let mut map: RedBlackMap<&str, u32> = RedBlackMap::new();
        assert_eq!(map.get("x"), None);
        assert_eq!(map.set("x", 1), Err(Error::InvalidArgument("x")));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        let ret = map.remove(&1);
        assert!(!map.contains_key(&1));
        assert_eq!(ret, Some((1, 1)));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut map = RedBlackMap::new();
        for key in 0..10 {
            map.insert(key * 2, key);
        }
        let mut before = Vec::new();
        shape(&map.tree, &mut before);

        assert_eq!(map.remove(&7), None);

        let mut after = Vec::new();
        shape(&map.tree, &mut after);
        assert_eq!(before, after);
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn test_remove_keeps_invariants() {
        let mut map = RedBlackMap::new();
        for key in 0..64u32 {
            map.insert(key, key);
        }
        for key in (0..64u32).filter(|key| key % 3 != 0) {
            assert_eq!(map.remove(&key), Some((key, key)));
            assert!(map.is_bst());
            assert!(map.is_balanced());
        }
        assert_eq!(
            map.iter().map(|pair| *pair.0).collect::<Vec<u32>>(),
            (0..64u32).filter(|key| key % 3 == 0).collect::<Vec<u32>>(),
        );
    }

    #[test]
    fn test_detects_unordered_keys() {
        let mut map = RedBlackMap::new();
        map.insert(1, ());
        map.insert(2, ());
        if let Some(ref mut node) = map.tree {
            node.entry.key = 0;
        }
        assert!(!map.is_bst());
    }

    #[test]
    fn test_detects_red_root() {
        let mut map = RedBlackMap::new();
        map.insert(1, ());
        if let Some(ref mut node) = map.tree {
            node.color = Color::Red;
        }
        assert!(!map.is_balanced());
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_clear() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.black_height(), Some(0));
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }
}
