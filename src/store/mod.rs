//! Bookmark store persistence
//!
//! Reads and writes the Safari `Bookmarks.plist` file and maps between the
//! raw property list and the node model. Only the fields the engine needs
//! are modeled (`Children`, `WebBookmarkUUID`, `WebBookmarkType`,
//! `URLString` and the title fields); everything else a node carries —
//! sync records, reading-list metadata, preview text — is kept in the
//! node's `extra` dictionary and written back untouched.
//!
//! A backup of the unmodified file is written before any mutation; a failed
//! backup aborts the invocation with no changes made.

pub mod error;

pub use error::StoreError;

use std::fs;
use std::path::Path;

use plist::{Dictionary, Value};

use crate::node::{Bookmark, BookmarkNode, Folder, KIND_LEAF, KIND_LIST};
use crate::tree::BookmarkTree;

const KEY_CHILDREN: &str = "Children";
const KEY_TITLE: &str = "Title";
const KEY_URI_DICT: &str = "URIDictionary";
const KEY_URI_TITLE: &str = "title";
const KEY_URL: &str = "URLString";
const KEY_TYPE: &str = "WebBookmarkType";
const KEY_UUID: &str = "WebBookmarkUUID";

/// Load a bookmark tree from a plist file (binary or XML)
///
/// # Errors
///
/// Returns `StoreError::Load` if the file cannot be read or parsed, and
/// `StoreError::Schema` if the plist does not look like a bookmark store.
pub fn load(path: &Path) -> Result<BookmarkTree, StoreError> {
    let value = Value::from_file(path).map_err(StoreError::Load)?;
    tree_from_value(value)
}

/// Write a bookmark tree back to a binary plist file
///
/// # Errors
///
/// Returns `StoreError::Save` if serialization or the write fails.
pub fn save(tree: &BookmarkTree, path: &Path) -> Result<(), StoreError> {
    let value = tree_to_value(tree);
    value.to_file_binary(path).map_err(StoreError::Save)
}

/// Copy the unmodified store from `src` to `dst`, replacing any stale copy
///
/// Called before any mutation is attempted; a failure here is fatal and
/// guarantees the original file was not touched.
///
/// # Errors
///
/// Returns `StoreError::Backup` if the copy fails.
pub fn backup(src: &Path, dst: &Path) -> Result<(), StoreError> {
    if dst.exists() {
        fs::remove_file(dst)?;
    }
    fs::copy(src, dst)?;
    Ok(())
}

/// Map a raw plist value to the node model
///
/// # Errors
///
/// Returns `StoreError::Schema` on malformed shapes (non-dictionary nodes,
/// missing identifiers, non-string URLs).
pub fn tree_from_value(value: Value) -> Result<BookmarkTree, StoreError> {
    let dict = value
        .into_dictionary()
        .ok_or_else(|| StoreError::Schema("root is not a dictionary".to_string()))?;
    if dict.get(KEY_CHILDREN).is_none() {
        return Err(StoreError::Schema(
            "root dictionary has no Children".to_string(),
        ));
    }
    match node_from_dict(dict)? {
        BookmarkNode::Folder(root) => Ok(BookmarkTree::new(root)),
        BookmarkNode::Leaf(_) => unreachable!("root has Children"),
    }
}

/// Map a bookmark tree back to a raw plist value
#[must_use]
pub fn tree_to_value(tree: &BookmarkTree) -> Value {
    folder_to_value(&tree.root)
}

fn node_from_value(value: Value) -> Result<BookmarkNode, StoreError> {
    let dict = value
        .into_dictionary()
        .ok_or_else(|| StoreError::Schema("bookmark node is not a dictionary".to_string()))?;
    node_from_dict(dict)
}

fn node_from_dict(mut dict: Dictionary) -> Result<BookmarkNode, StoreError> {
    let id = match dict.remove(KEY_UUID) {
        Some(Value::String(id)) => id,
        Some(_) => {
            return Err(StoreError::Schema(
                "WebBookmarkUUID is not a string".to_string(),
            ))
        }
        None => {
            return Err(StoreError::Schema(
                "bookmark node has no WebBookmarkUUID".to_string(),
            ))
        }
    };
    let title = take_title(&mut dict);
    let children = dict.remove(KEY_CHILDREN);

    match children {
        Some(Value::Array(raw_children)) => {
            let kind = take_kind(&mut dict, KIND_LIST);
            let children = raw_children
                .into_iter()
                .map(node_from_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(BookmarkNode::Folder(Folder {
                id,
                title,
                kind,
                children,
                extra: dict,
            }))
        }
        Some(_) => Err(StoreError::Schema("Children is not an array".to_string())),
        None => {
            let kind = take_kind(&mut dict, KIND_LEAF);
            let url = match dict.remove(KEY_URL) {
                Some(Value::String(url)) => Some(url),
                Some(_) => {
                    return Err(StoreError::Schema("URLString is not a string".to_string()))
                }
                None => None,
            };
            Ok(BookmarkNode::Leaf(Bookmark {
                id,
                title,
                kind,
                url,
                extra: dict,
            }))
        }
    }
}

/// Resolve a node title: the nested `URIDictionary.title` wins, a direct
/// `Title` field is the fallback. Both keys are consumed either way so they
/// do not linger in `extra` and clash on save.
fn take_title(dict: &mut Dictionary) -> Option<String> {
    let uri_title = match dict.remove(KEY_URI_DICT) {
        Some(Value::Dictionary(uri)) => match uri.get(KEY_URI_TITLE) {
            Some(Value::String(title)) => Some(title.clone()),
            _ => None,
        },
        _ => None,
    };
    let direct = match dict.remove(KEY_TITLE) {
        Some(Value::String(title)) => Some(title),
        _ => None,
    };
    uri_title.or(direct)
}

fn take_kind(dict: &mut Dictionary, default: &str) -> String {
    match dict.remove(KEY_TYPE) {
        Some(Value::String(kind)) => kind,
        _ => default.to_string(),
    }
}

fn node_to_value(node: &BookmarkNode) -> Value {
    match node {
        BookmarkNode::Folder(f) => folder_to_value(f),
        BookmarkNode::Leaf(b) => bookmark_to_value(b),
    }
}

fn folder_to_value(folder: &Folder) -> Value {
    let mut dict = folder.extra.clone();
    dict.insert(KEY_UUID.to_string(), Value::String(folder.id.clone()));
    dict.insert(KEY_TYPE.to_string(), Value::String(folder.kind.clone()));
    if let Some(title) = &folder.title {
        dict.insert(KEY_TITLE.to_string(), Value::String(title.clone()));
    }
    dict.insert(
        KEY_CHILDREN.to_string(),
        Value::Array(folder.children.iter().map(node_to_value).collect()),
    );
    Value::Dictionary(dict)
}

fn bookmark_to_value(bookmark: &Bookmark) -> Value {
    let mut dict = bookmark.extra.clone();
    dict.insert(KEY_UUID.to_string(), Value::String(bookmark.id.clone()));
    dict.insert(KEY_TYPE.to_string(), Value::String(bookmark.kind.clone()));
    if let Some(title) = &bookmark.title {
        let mut uri = Dictionary::new();
        uri.insert(KEY_URI_TITLE.to_string(), Value::String(title.clone()));
        dict.insert(KEY_URI_DICT.to_string(), Value::Dictionary(uri));
    }
    if let Some(url) = &bookmark.url {
        dict.insert(KEY_URL.to_string(), Value::String(url.clone()));
    }
    Value::Dictionary(dict)
}
