//! An unbalanced BST that counts the comparisons it makes. Nothing is ever rotated, so the shape of
//! the tree is decided entirely by the order keys are inserted in. That makes it handy for
//! watching a BST degrade: keys inserted in sorted order build a chain and every lookup becomes a
//! linear scan, which the loop counters make visible.
//!
//! # Examples
//!
//! ```
//! use bst_map::tree::{Traversal, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&5), None);
//!
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key, key * 10);
//! }
//! assert_eq!(tree.find(&4), Some(&40));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(4, 41);
//! assert_eq!(tree.find(&4), Some(&41));
//! assert_eq!(tree.size(), 5);
//!
//! let keys = |entries: Vec<_>| {
//!     entries
//!         .into_iter()
//!         .map(|entry: bst_map::Entry<i32, i32>| *entry.key())
//!         .collect::<Vec<_>>()
//! };
//! assert_eq!(keys(tree.entry_list()), [5, 3, 8, 1, 4]);
//! assert_eq!(keys(tree.entry_list_in(Traversal::InOrder)), [1, 3, 4, 5, 8]);
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::entry::Entry;
use crate::error::ParseTraversalError;

/// The depth-first orders [`Tree::entry_list_in`] can walk the tree in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then the node, then the right subtree. Yields keys in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
}

/// Numeric traversal selectors: `1` is pre-order, `2` is post-order and `3` is in-order. Anything
/// else is an error rather than an empty traversal.
///
/// # Examples
///
/// ```
/// use bst_map::tree::Traversal;
///
/// assert_eq!(Traversal::try_from(3u8), Ok(Traversal::InOrder));
/// assert!(Traversal::try_from(4u8).is_err());
/// ```
impl TryFrom<u8> for Traversal {
    type Error = ParseTraversalError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(Self::PreOrder),
            2 => Ok(Self::PostOrder),
            3 => Ok(Self::InOrder),
            n => Err(ParseTraversalError::UnknownSelector(n)),
        }
    }
}

/// Parses `pre`, `in` or `post`, optionally followed by `order` or `-order`, ignoring case.
impl FromStr for Traversal {
    type Err = ParseTraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Self::PreOrder),
            "in" | "inorder" | "in-order" => Ok(Self::InOrder),
            "post" | "postorder" | "post-order" => Ok(Self::PostOrder),
            _ => Err(ParseTraversalError::UnknownName(s.to_string())),
        }
    }
}

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree mapping keys to values. Keys are unique: inserting a key that is already
/// present replaces its value.
///
/// Besides the map operations, the tree keeps two comparison counters, one for [`Tree::insert`]
/// and one for [`Tree::find`]. They only ever grow until they are reset with
/// [`Tree::reset_insert_loops`] and [`Tree::reset_find_loops`].
pub struct Tree<K, V> {
    root: Link<K, V>,
    count: usize,
    insert_loops: usize,
    // `find` only borrows the tree but still has to count.
    find_loops: Cell<usize>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.in_order().into_iter().map(|n| (&n.key, &n.value)))
            .finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
            insert_loops: 0,
            find_loops: Cell::new(0),
        }
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value and doesn't change the size of the tree.
    ///
    /// Every key comparison on the way down adds one to the insert loop count. Inserting into an
    /// empty tree compares nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.insert_loop_count(), 0);
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.find(&1), Some(&3));
    /// assert_eq!(tree.insert_loop_count(), 1);
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut comparisons = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            comparisons += 1;
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    node.value = value;
                    self.insert_loops += comparisons;
                    trace!(comparisons, "overwrote value of existing key");
                    return;
                }
            }
        }

        *link = Some(Node::new_boxed(key, value));
        self.count += 1;
        self.insert_loops += comparisons;
        trace!(comparisons, size = self.count, "inserted new node");
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// Finding a key at depth `d` (the root being at depth 1) adds `d` to the find loop count.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// assert_eq!(tree.find_loop_count(), 2);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            self.find_loops.set(self.find_loops.get() + 1);
            match key.cmp(&node.key) {
                Ordering::Less => link = node.left(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => link = node.right(),
            }
        }

        trace!("key not found");
        None
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a height
    /// of 0 and a lone root has a height of 1.
    ///
    /// This walks the whole tree every time it is called.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// How many keys are stored in the tree.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node from the tree. The loop counters keep their values.
    pub fn clear(&mut self) {
        let released = release(self.root.take());
        self.count = 0;
        debug!(released, "cleared tree");
    }

    /// Copies every key and value out of the tree in level order: the root, then all nodes one
    /// level down from left to right, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::tree::Tree;
    ///
    /// let tree: Tree<_, _> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// let pairs: Vec<(i32, char)> = tree.entry_list().into_iter().map(Into::into).collect();
    ///
    /// assert_eq!(pairs, [(2, 'b'), (1, 'a'), (3, 'c')]);
    /// ```
    pub fn entry_list(&self) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.level_order().into_iter().map(Node::entry).collect()
    }

    /// Copies every key and value out of the tree in the given depth-first order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::tree::{Traversal, Tree};
    ///
    /// let tree: Tree<_, _> = [(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// let keys = |order| -> Vec<i32> {
    ///     tree.entry_list_in(order).iter().map(|e| *e.key()).collect()
    /// };
    ///
    /// assert_eq!(keys(Traversal::PreOrder), [2, 1, 3]);
    /// assert_eq!(keys(Traversal::InOrder), [1, 2, 3]);
    /// assert_eq!(keys(Traversal::PostOrder), [1, 3, 2]);
    /// ```
    pub fn entry_list_in(&self, order: Traversal) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        let nodes = match order {
            Traversal::PreOrder => self.pre_order(),
            Traversal::InOrder => self.in_order(),
            Traversal::PostOrder => self.post_order(),
        };

        nodes.into_iter().map(Node::entry).collect()
    }

    /// The number of key comparisons made by [`Tree::find`] since the last reset.
    pub fn find_loop_count(&self) -> usize {
        self.find_loops.get()
    }

    /// The number of key comparisons made by [`Tree::insert`] since the last reset.
    pub fn insert_loop_count(&self) -> usize {
        self.insert_loops
    }

    /// Sets the find loop count back to zero.
    pub fn reset_find_loops(&mut self) {
        *self.find_loops.get_mut() = 0;
    }

    /// Sets the insert loop count back to zero.
    pub fn reset_insert_loops(&mut self) {
        self.insert_loops = 0;
    }

    fn level_order(&self) -> Vec<&Node<K, V>> {
        let mut visited = Vec::with_capacity(self.count);
        let mut queue = VecDeque::new();
        // Only a present root is queued.
        queue.extend(self.root.as_deref());
        while let Some(node) = queue.pop_front() {
            visited.push(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }

        visited
    }

    fn pre_order(&self) -> Vec<&Node<K, V>> {
        let mut visited = Vec::with_capacity(self.count);
        let mut stack: Vec<_> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(node);
            // Right first so the left subtree is popped first.
            stack.extend(node.right());
            stack.extend(node.left());
        }

        visited
    }

    fn in_order(&self) -> Vec<&Node<K, V>> {
        let mut visited = Vec::with_capacity(self.count);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            match stack.pop() {
                Some(node) => {
                    visited.push(node);
                    current = node.right();
                }
                None => break,
            }
        }

        visited
    }

    /// Node, right, left is exactly post-order backwards.
    fn post_order(&self) -> Vec<&Node<K, V>> {
        let mut visited = Vec::with_capacity(self.count);
        let mut stack: Vec<_> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        visited.reverse();

        visited
    }
}

/// Drops a subtree one node at a time so a degenerate, chain shaped tree can't overflow the stack
/// with nested `Box` drops. Returns how many nodes were dropped.
fn release<K, V>(root: Link<K, V>) -> usize {
    let mut released = 0;
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        released += 1;
    }

    released
}

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn entry(&self) -> Entry<K, V>
    where
        K: Clone,
        V: Clone,
    {
        Entry::new(self.key.clone(), self.value.clone())
    }
}
