//! Store-specific error types
//!
//! Failures reading, writing or backing up the persisted bookmark store,
//! plus schema violations found while mapping the raw property list into
//! the node model.

use thiserror::Error;

/// Errors raised by the bookmark store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The bookmarks file could not be read or parsed
    #[error("Failed to load bookmarks file: {0}")]
    Load(plist::Error),

    /// The bookmarks file could not be serialized or written
    #[error("Failed to save bookmarks file: {0}")]
    Save(plist::Error),

    /// The pre-mutation backup copy failed; fatal, nothing is modified
    #[error("Failed to back up bookmarks file: {0}")]
    Backup(#[from] std::io::Error),

    /// The property list did not have the expected bookmark schema
    #[error("Unexpected bookmarks schema: {0}")]
    Schema(String),
}
