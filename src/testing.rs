//! Testing utilities for bmarkr
//!
//! Tree-building helpers shared across unit tests. Only available when
//! compiled with `cfg(test)`.

use crate::node::{Bookmark, BookmarkNode, Folder};
use crate::tree::BookmarkTree;

/// Build a leaf bookmark node
#[must_use]
pub fn leaf(id: &str, title: Option<&str>, url: Option<&str>) -> BookmarkNode {
    Bookmark::new(id, title, url).into()
}

/// Build a folder node with the given children
#[must_use]
pub fn folder(id: &str, title: Option<&str>, children: Vec<BookmarkNode>) -> BookmarkNode {
    Folder::new(id, title).with_children(children).into()
}

/// Build a tree from top-level children, rooted at an untitled root folder
/// with identifier `root` (the real store's root carries no title either)
#[must_use]
pub fn tree(children: Vec<BookmarkNode>) -> BookmarkTree {
    BookmarkTree::new(Folder::new("root", None).with_children(children))
}

/// A small tree exercising duplicate folder titles and nesting:
///
/// ```text
/// root (untitled)
/// ├── BookmarksBar (f-bar)
/// │   ├── "Daily News"  http://news.example.com   (b-bar)
/// │   └── Work (f-work1)
/// │       ├── "Rust Blog"  http://blog.rust-lang.org  (b-work1)
/// │       └── Nested (f-nested)
/// │           └── "Deep Link"  http://nested.example.com  (b-nested)
/// └── Work (f-work2)
///     └── "Other"  http://other.com  (b-other)
/// ```
#[must_use]
pub fn sample_tree() -> BookmarkTree {
    tree(vec![
        folder(
            "f-bar",
            Some("BookmarksBar"),
            vec![
                leaf("b-bar", Some("Daily News"), Some("http://news.example.com")),
                folder(
                    "f-work1",
                    Some("Work"),
                    vec![
                        leaf(
                            "b-work1",
                            Some("Rust Blog"),
                            Some("http://blog.rust-lang.org"),
                        ),
                        folder(
                            "f-nested",
                            Some("Nested"),
                            vec![leaf(
                                "b-nested",
                                Some("Deep Link"),
                                Some("http://nested.example.com"),
                            )],
                        ),
                    ],
                ),
            ],
        ),
        folder(
            "f-work2",
            Some("Work"),
            vec![leaf("b-other", Some("Other"), Some("http://other.com"))],
        ),
    ])
}
