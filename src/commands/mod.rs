//! Command implementations
//!
//! One module per operation, each with an `execute` function that takes the
//! loaded tree plus parsed CLI arguments and returns the updated tree.
//! Folder resolution (title to identifier, with interactive disambiguation
//! when several folders share a title) is shared across commands.

pub mod add;
pub mod mv;
pub mod remove;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use mv::execute as mv;
pub use remove::execute as remove;

use colored::Colorize;

use crate::tree::BookmarkTree;
use crate::ui::{InputError, UserInput};
use crate::BmarkrError;

type Result<T> = std::result::Result<T, BmarkrError>;

/// Resolve a folder title to exactly one folder identifier
///
/// Zero matching folders is `NotFound`. A single match resolves directly.
/// Several matches are disambiguated interactively: each candidate is
/// presented by its dot-joined folder address, in pre-order.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty title, `NotFound` when no folder
/// carries the title, and `InputError::Cancelled` if the user backs out of
/// the disambiguation prompt.
pub fn resolve_folder(
    tree: &BookmarkTree,
    title: &str,
    input: &dyn UserInput,
    quiet: bool,
) -> Result<String> {
    if title.is_empty() {
        return Err(BmarkrError::InvalidInput(
            "Destination folder title cannot be empty".into(),
        ));
    }

    let mut ids = tree.folder_ids_by_title(title);
    match ids.len() {
        0 => Err(BmarkrError::NotFound(format!(
            "No folders found with title \"{title}\""
        ))),
        1 => Ok(ids.remove(0)),
        _ => {
            if !quiet {
                println!(
                    "Multiple folders found with title {}",
                    format!("\"{title}\"").yellow()
                );
            }
            let addresses: Vec<String> =
                ids.iter().map(|id| tree.folder_address(id)).collect();
            let choice = input
                .prompt_select("Select the destination folder", &addresses)?
                .ok_or(InputError::Cancelled)?;
            ids.get(choice).cloned().ok_or_else(|| {
                BmarkrError::InvalidInput(format!(
                    "Selection {choice} is not one of the presented folders"
                ))
            })
        }
    }
}

/// A bookmark's display name for status messages: title, else URL, else id
pub(crate) fn display_name(bookmark: &crate::node::Bookmark) -> &str {
    bookmark
        .title
        .as_deref()
        .or(bookmark.url.as_deref())
        .unwrap_or(&bookmark.id)
}
