//! Bmarkr - a manager for the Safari bookmark tree
//!
//! This library implements the bookmark tree engine behind the `bmarkr`
//! CLI: a node model for the folder/leaf tree stored in `Bookmarks.plist`,
//! recursive queries (regex matching, folder lookup, address computation),
//! value-returning structural mutations, and the three orchestrated
//! operations (add, move, remove).

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod node;
pub mod store;
pub mod tree;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BmarkrError {
    /// Tree engine error (e.g. an invalid match pattern)
    #[error("Tree error: {0}")]
    Tree(#[from] tree::TreeError),
    /// Store error (load, save, backup, schema)
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
    /// User input error
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A folder resolution or bookmark search came up empty
    #[error("{0}")]
    NotFound(String),
}
