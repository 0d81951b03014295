//! Bookmark tree node model
//!
//! The Safari bookmark store is an ordered tree of heterogeneous nodes:
//! folders (which carry children) and leaf bookmarks (which carry a URL).
//! This module defines the node shape the rest of the crate operates on.
//!
//! Titles are resolved at the store boundary (a leaf's title lives in a
//! nested `URIDictionary` dict, a folder's in a direct `Title` field), so
//! the model only ever sees a plain `Option<String>`.
//!
//! Node order within a folder is display order and is semantically
//! meaningful: every operation preserves it except explicit moves and
//! removals.

use plist::Dictionary;

/// `WebBookmarkType` tag carried by leaf bookmarks.
pub const KIND_LEAF: &str = "WebBookmarkTypeLeaf";

/// `WebBookmarkType` tag carried by folders (including the root list).
pub const KIND_LIST: &str = "WebBookmarkTypeList";

/// A folder node: an identified, ordered list of child nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    /// Unique identifier (`WebBookmarkUUID`)
    pub id: String,
    /// Resolved title, if the folder has one
    pub title: Option<String>,
    /// Raw `WebBookmarkType` tag, preserved across a load/save cycle
    pub kind: String,
    /// Ordered children; order is display order
    pub children: Vec<BookmarkNode>,
    /// Plist fields the engine does not model, passed through untouched
    pub extra: Dictionary,
}

/// A leaf bookmark node
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    /// Unique identifier (`WebBookmarkUUID`)
    pub id: String,
    /// Resolved title, if the bookmark has one
    pub title: Option<String>,
    /// Raw `WebBookmarkType` tag, preserved across a load/save cycle
    pub kind: String,
    /// Bookmark URL; proxy entries (reading list, history) have none
    pub url: Option<String>,
    /// Plist fields the engine does not model, passed through untouched
    pub extra: Dictionary,
}

/// A node in the bookmark tree, either a folder or a leaf bookmark
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkNode {
    /// Folder with ordered children
    Folder(Folder),
    /// Leaf bookmark
    Leaf(Bookmark),
}

impl Folder {
    /// Create a folder with no children and no passthrough fields
    #[must_use]
    pub fn new(id: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            kind: KIND_LIST.to_string(),
            children: Vec::new(),
            extra: Dictionary::new(),
        }
    }

    /// Replace the folder's children, builder-style
    #[must_use]
    pub fn with_children(mut self, children: Vec<BookmarkNode>) -> Self {
        self.children = children;
        self
    }
}

impl Bookmark {
    /// Create a leaf bookmark with no passthrough fields
    #[must_use]
    pub fn new(id: impl Into<String>, title: Option<&str>, url: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            kind: KIND_LEAF.to_string(),
            url: url.map(str::to_string),
            extra: Dictionary::new(),
        }
    }
}

impl BookmarkNode {
    /// The node's unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(f) => &f.id,
            Self::Leaf(b) => &b.id,
        }
    }

    /// The node's resolved title, if any
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Folder(f) => f.title.as_deref(),
            Self::Leaf(b) => b.title.as_deref(),
        }
    }

    /// The raw `WebBookmarkType` tag
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Folder(f) => &f.kind,
            Self::Leaf(b) => &b.kind,
        }
    }

    /// The node's URL; always `None` for folders
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Folder(_) => None,
            Self::Leaf(b) => b.url.as_deref(),
        }
    }

    /// Whether this node is a folder
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// The node's children; empty for leaves
    #[must_use]
    pub fn children(&self) -> &[BookmarkNode] {
        match self {
            Self::Folder(f) => &f.children,
            Self::Leaf(_) => &[],
        }
    }
}

impl From<Folder> for BookmarkNode {
    fn from(folder: Folder) -> Self {
        Self::Folder(folder)
    }
}

impl From<Bookmark> for BookmarkNode {
    fn from(bookmark: Bookmark) -> Self {
        Self::Leaf(bookmark)
    }
}
