//! The key/value pairs handed out by tree traversals.

/// A key and its value, copied out of the tree while traversing it.
///
/// Entries are snapshots: changing the tree afterwards doesn't change an `Entry` that was already
/// produced.
///
/// # Examples
///
/// ```
/// use bst_map::tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert(1, "one");
///
/// let entries = tree.entry_list();
/// assert_eq!(entries[0].key(), &1);
/// assert_eq!(entries[0].value(), &"one");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The key of the visited node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored at [`key`][Entry::key] when the node was visited.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}
