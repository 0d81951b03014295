//! Read-only tree traversal
//!
//! Attribute matching, identifier containment checks, match collection and
//! folder lookup by title. All traversals are pre-order (top-to-bottom,
//! left-to-right), matching the display order of the bookmark UI.

use regex::Regex;

use super::error::TreeError;
use super::BookmarkTree;
use crate::node::{Bookmark, BookmarkNode, Folder};

/// A node attribute a pattern can be matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Resolved title; regex partial match
    Title,
    /// Bookmark URL; regex partial match
    Url,
    /// `WebBookmarkType` tag; exact equality
    Kind,
    /// `WebBookmarkUUID`; exact equality
    Id,
}

/// A compiled match predicate over a single node attribute
///
/// Title and URL patterns are regular expressions with partial-match
/// semantics: the pattern matching anywhere inside the value counts.
/// Kind and identifier comparisons are exact string equality. A node that
/// lacks the attribute never matches.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Regex match against the resolved title
    Title(Regex),
    /// Regex match against the URL
    Url(Regex),
    /// Exact match against the `WebBookmarkType` tag
    Kind(String),
    /// Exact match against the identifier
    Id(String),
}

impl Matcher {
    /// Compile a matcher for the given attribute and pattern
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidPattern` if `attribute` is `Title` or `Url`
    /// and `pattern` is not a valid regular expression.
    pub fn new(attribute: Attribute, pattern: &str) -> Result<Self, TreeError> {
        Ok(match attribute {
            Attribute::Title => Self::Title(Regex::new(pattern)?),
            Attribute::Url => Self::Url(Regex::new(pattern)?),
            Attribute::Kind => Self::Kind(pattern.to_string()),
            Attribute::Id => Self::Id(pattern.to_string()),
        })
    }

    /// Compile a title matcher
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidPattern` on an invalid regex.
    pub fn title(pattern: &str) -> Result<Self, TreeError> {
        Self::new(Attribute::Title, pattern)
    }

    /// Compile a URL matcher
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidPattern` on an invalid regex.
    pub fn url(pattern: &str) -> Result<Self, TreeError> {
        Self::new(Attribute::Url, pattern)
    }

    /// Exact identifier matcher
    #[must_use]
    pub fn id(id: &str) -> Self {
        Self::Id(id.to_string())
    }

    /// Test a node against this matcher
    #[must_use]
    pub fn matches(&self, node: &BookmarkNode) -> bool {
        match self {
            Self::Title(re) => node.title().is_some_and(|t| re.is_match(t)),
            Self::Url(re) => node.url().is_some_and(|u| re.is_match(u)),
            Self::Kind(tag) => node.kind() == tag,
            Self::Id(id) => node.id() == id,
        }
    }
}

impl BookmarkNode {
    /// Whether `id` identifies this node or any of its descendants
    ///
    /// A node counts as containing itself regardless of whether it is a
    /// folder or a leaf.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        if self.id() == id {
            return true;
        }
        self.children().iter().any(|child| child.contains_id(id))
    }
}

impl Folder {
    /// Whether `id` identifies this folder or any of its descendants
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.id == id || self.children.iter().any(|child| child.contains_id(id))
    }
}

impl BookmarkTree {
    /// Whether `id` identifies any node in the tree, the root included
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.root.contains_id(id)
    }

    /// Collect every leaf bookmark matching `matcher`, in pre-order
    ///
    /// Folders are only traversed, never returned. Duplicate suppression
    /// across separate collections (e.g. a URL pass merged with a title
    /// pass) is the caller's responsibility, keyed on identifier.
    #[must_use]
    pub fn collect_matches(&self, matcher: &Matcher) -> Vec<Bookmark> {
        let mut found = Vec::new();
        collect_in_children(&self.root.children, matcher, &mut found);
        found
    }

    /// Dot-joined titles from the root down to the folder identified by `id`
    ///
    /// Untitled folders along the path contribute no segment and no
    /// separator. Returns an empty string when `id` is not in the tree;
    /// callers decide whether that is an error.
    #[must_use]
    pub fn folder_address(&self, id: &str) -> String {
        let mut segments = Vec::new();
        if address_segments(&self.root, id, &mut segments) {
            segments.join(".")
        } else {
            String::new()
        }
    }

    /// Identifiers of every descendant folder whose resolved title equals
    /// `title` exactly, in pre-order
    ///
    /// The root folder itself never matches; the search starts at its
    /// children.
    #[must_use]
    pub fn folder_ids_by_title(&self, title: &str) -> Vec<String> {
        let mut ids = Vec::new();
        folder_ids_in_children(&self.root.children, title, &mut ids);
        ids
    }
}

fn collect_in_children(children: &[BookmarkNode], matcher: &Matcher, found: &mut Vec<Bookmark>) {
    for child in children {
        match child {
            BookmarkNode::Folder(f) => collect_in_children(&f.children, matcher, found),
            BookmarkNode::Leaf(b) => {
                if matcher.matches(child) {
                    found.push(b.clone());
                }
            }
        }
    }
}

/// Push the titles along the path from `folder` to the target onto
/// `segments`; true if the target was found in this subtree.
fn address_segments(folder: &Folder, id: &str, segments: &mut Vec<String>) -> bool {
    let pushed = match &folder.title {
        Some(title) if !title.is_empty() => {
            segments.push(title.clone());
            true
        }
        _ => false,
    };

    if folder.id == id {
        return true;
    }
    for child in &folder.children {
        if let BookmarkNode::Folder(f) = child {
            if f.contains_id(id) && address_segments(f, id, segments) {
                return true;
            }
        }
    }

    if pushed {
        segments.pop();
    }
    false
}

fn folder_ids_in_children(children: &[BookmarkNode], title: &str, ids: &mut Vec<String>) {
    for child in children {
        if let BookmarkNode::Folder(f) = child {
            if f.title.as_deref() == Some(title) {
                ids.push(f.id.clone());
            }
            folder_ids_in_children(&f.children, title, ids);
        }
    }
}
