//! This crate exposes an ordered map backed by an unbalanced Binary Search Tree (BST) that counts
//! the work it does, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! records. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores a
//! key, the value associated with it and up to two child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` comparisons, where `height` is the number of nodes on the
//! longest path from the root `Node` to a leaf `Node`. Without any rebalancing the height depends
//! only on the insertion order, anywhere from `O(lg N)` to `N`. The [`Tree`] in this crate never
//! rebalances and counts every comparison so the difference can be measured:
//!
//! ```
//! use bst_map::{BstMap, Map};
//!
//! // Sorted insertion builds a chain.
//! let chain: BstMap<_, _> = (0..127).map(|x| (x, x)).collect();
//! // Inserting the middle first builds a perfectly balanced tree.
//! let mut balanced = BstMap::new();
//! for level in 0..7 {
//!     let step = 128 >> level;
//!     for x in (step / 2..128).step_by(step as usize) {
//!         balanced.put(x - 1, x - 1);
//!     }
//! }
//!
//! assert_eq!(chain.height(), 127);
//! assert_eq!(balanced.height(), 7);
//!
//! chain.get(&126).unwrap();
//! balanced.get(&126).unwrap();
//! assert_eq!(chain.get_loop_count(), 127);
//! assert_eq!(balanced.get_loop_count(), 7);
//! ```
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. See [`Traversal`] for that and the other orders.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod entry;
pub mod error;
pub mod map;
pub mod tree;

pub use entry::Entry;
pub use error::{KeyNotFound, ParseTraversalError};
pub use map::{BstMap, Map};
pub use tree::{Traversal, Tree};
