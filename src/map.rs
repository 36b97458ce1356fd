//! The generic [`Map`] contract and [`BstMap`], its implementation on top of a [`Tree`].
//!
//! # Examples
//!
//! ```
//! use bst_map::{BstMap, KeyNotFound, Map};
//!
//! let mut map = BstMap::new();
//! map.put("b", 2);
//! map.put("a", 1);
//!
//! assert!(map.contains_key(&"a"));
//! assert!(!map.contains_key(&"z"));
//!
//! assert_eq!(map.get(&"b"), Ok(&2));
//! assert_eq!(map.get(&"z"), Err(KeyNotFound));
//! ```

use std::fmt;

use crate::entry::Entry;
use crate::error::KeyNotFound;
use crate::tree::{Traversal, Tree};

/// A map from unique keys to values.
pub trait Map<K, V> {
    /// Whether a value is stored at `key`. Never fails: a missing key is just `false`.
    fn contains_key(&self, key: &K) -> bool;

    /// The value stored at `key`, or [`KeyNotFound`] if there is none.
    fn get(&self, key: &K) -> Result<&V, KeyNotFound>;

    /// Stores `value` at `key`, replacing any value already there.
    fn put(&mut self, key: K, value: V);

    /// How many keys are stored.
    fn size(&self) -> usize;

    /// Whether no keys are stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes everything.
    fn clear(&mut self);

    /// Copies out every key and value.
    fn entry_list(&self) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone;
}

/// A [`Map`] backed by an unbalanced [`Tree`]. Lookups and insertions are counted under the map's
/// own names: `get` for [`Tree::find`] and `put` for [`Tree::insert`].
pub struct BstMap<K, V> {
    tree: Tree<K, V>,
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for BstMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BstMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, V> Extend<(K, V)> for BstMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<K: Ord, V> Map<K, V> for BstMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        self.tree.find(key).is_some()
    }

    fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.tree.find(key).ok_or(KeyNotFound)
    }

    fn put(&mut self, key: K, value: V) {
        self.tree.insert(key, value);
    }

    fn size(&self) -> usize {
        self.tree.size()
    }

    fn clear(&mut self) {
        self.tree.clear();
    }

    /// Entries come out in level order, see [`Tree::entry_list`].
    fn entry_list(&self) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.tree.entry_list()
    }
}

impl<K, V> BstMap<K, V> {
    /// Generates a new, empty `BstMap`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The tree behind this map.
    pub fn tree(&self) -> &Tree<K, V> {
        &self.tree
    }

    /// See [`Tree::height`].
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// See [`Tree::entry_list_in`].
    pub fn entry_list_in(&self, order: Traversal) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.tree.entry_list_in(order)
    }

    /// Comparisons made by [`Map::get`] and [`Map::contains_key`] since the last reset.
    pub fn get_loop_count(&self) -> usize {
        self.tree.find_loop_count()
    }

    /// Comparisons made by [`Map::put`] since the last reset.
    pub fn put_loop_count(&self) -> usize {
        self.tree.insert_loop_count()
    }

    /// Zeroes [`BstMap::get_loop_count`].
    pub fn reset_get_loops(&mut self) {
        self.tree.reset_find_loops();
    }

    /// Zeroes [`BstMap::put_loop_count`].
    pub fn reset_put_loops(&mut self) {
        self.tree.reset_insert_loops();
    }
}
