//! Bookmark tree engine
//!
//! Read-only queries (pattern matching, folder lookup, address computation)
//! and structural mutations (remove, move, insert) over the bookmark tree.
//!
//! Every mutation is value-returning: it consumes the tree and produces a new
//! tree reflecting the edit. Callers compose operations by threading the
//! returned tree into the next step; nothing is mutated in place behind the
//! caller's back.

pub mod error;
pub mod mutate;
pub mod query;

pub use error::TreeError;
pub use query::{Attribute, Matcher};

use crate::node::Folder;

/// A bookmark tree, rooted at the top-level folder whose children are the
/// bookmark bar, bookmark menu and the other top-level containers
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkTree {
    /// The root folder
    pub root: Folder,
}

impl BookmarkTree {
    /// Create a tree from its root folder
    #[must_use]
    pub const fn new(root: Folder) -> Self {
        Self { root }
    }
}
