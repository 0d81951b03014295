//! Tree engine error types

use thiserror::Error;

/// Errors raised by tree queries and mutations
#[derive(Debug, Error)]
pub enum TreeError {
    /// A match pattern failed to compile as a regular expression
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
