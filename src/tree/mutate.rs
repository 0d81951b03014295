//! Structural tree edits
//!
//! Remove matching leaves, relocate a bookmark between two folders, and
//! append new nodes under a target folder. Each operation consumes the tree
//! and returns the edited tree; sibling order is preserved everywhere except
//! at the explicit edit site.

use super::query::Matcher;
use super::BookmarkTree;
use crate::node::{Bookmark, BookmarkNode};

impl BookmarkTree {
    /// Remove every leaf bookmark matching `matcher`, anywhere in the tree
    ///
    /// Folders are never removed, only traversed with their children
    /// filtered. Applying the same matcher twice yields the same tree as
    /// applying it once.
    #[must_use]
    pub fn remove_matching(mut self, matcher: &Matcher) -> Self {
        self.root.children = remove_in_children(self.root.children, matcher);
        self
    }

    /// Relocate `item`: drop the leaf identified by `source_id` from its
    /// current position and append `item` to the children of the folder
    /// identified by `dest_id`
    ///
    /// Both effects happen in one whole-tree rewrite, so the destination may
    /// sit anywhere relative to the source. The caller must have resolved
    /// `dest_id` to a folder present in the tree; if it is absent the item
    /// is dropped from its source and appended nowhere.
    #[must_use]
    pub fn move_node(mut self, item: &Bookmark, source_id: &str, dest_id: &str) -> Self {
        self.root.children = move_in_children(self.root.children, item, source_id, dest_id);
        self
    }

    /// Append `nodes` to the children of the folder identified by `dest_id`
    ///
    /// Existing children keep their order; the new nodes land at the end.
    /// A tree without such a folder is returned unchanged.
    #[must_use]
    pub fn insert_into_folder(mut self, dest_id: &str, nodes: Vec<BookmarkNode>) -> Self {
        self.root.children = insert_in_children(self.root.children, dest_id, nodes);
        self
    }
}

fn remove_in_children(children: Vec<BookmarkNode>, matcher: &Matcher) -> Vec<BookmarkNode> {
    children
        .into_iter()
        .filter_map(|child| match child {
            BookmarkNode::Folder(mut f) => {
                f.children = remove_in_children(f.children, matcher);
                Some(BookmarkNode::Folder(f))
            }
            BookmarkNode::Leaf(_) => {
                if matcher.matches(&child) {
                    None
                } else {
                    Some(child)
                }
            }
        })
        .collect()
}

fn move_in_children(
    children: Vec<BookmarkNode>,
    item: &Bookmark,
    source_id: &str,
    dest_id: &str,
) -> Vec<BookmarkNode> {
    children
        .into_iter()
        .filter_map(|child| match child {
            BookmarkNode::Folder(mut f) => {
                f.children = move_in_children(f.children, item, source_id, dest_id);
                // Append after the recursion so a destination inside its own
                // subtree sees already-rewritten children
                if f.id == dest_id {
                    f.children.push(BookmarkNode::Leaf(item.clone()));
                }
                Some(BookmarkNode::Folder(f))
            }
            BookmarkNode::Leaf(b) if b.id == source_id => None,
            BookmarkNode::Leaf(b) => Some(BookmarkNode::Leaf(b)),
        })
        .collect()
}

fn insert_in_children(
    children: Vec<BookmarkNode>,
    dest_id: &str,
    nodes: Vec<BookmarkNode>,
) -> Vec<BookmarkNode> {
    children
        .into_iter()
        .map(|child| match child {
            BookmarkNode::Folder(mut f) => {
                if f.id == dest_id {
                    f.children.extend(nodes.iter().cloned());
                } else if f.contains_id(dest_id) {
                    f.children = insert_in_children(f.children, dest_id, nodes.clone());
                }
                BookmarkNode::Folder(f)
            }
            leaf => leaf,
        })
        .collect()
}
