//! Errors surfaced by the map and by [`Traversal`][crate::tree::Traversal] parsing.

use thiserror::Error;

/// Returned by [`Map::get`][crate::map::Map::get] when no node holds the requested key.
///
/// It carries no other information: reaching an empty child during the search is proof enough that
/// the key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("key not found")]
pub struct KeyNotFound;

/// Failure to turn a numeric selector or a name into a [`Traversal`][crate::tree::Traversal].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTraversalError {
    /// The numeric selector is not one of `1` (pre-order), `2` (post-order) or `3` (in-order).
    #[error("unknown traversal selector {0}")]
    UnknownSelector(u8),
    /// The name doesn't spell any traversal order.
    #[error("unknown traversal name `{0}`")]
    UnknownName(String),
}
