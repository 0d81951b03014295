//! Remove bookmarks matching a pattern

use colored::Colorize;

use super::{display_name, Result};
use crate::tree::{BookmarkTree, Matcher};
use crate::ui::UserInput;
use crate::BmarkrError;

/// Remove every bookmark whose URL or title matches `pattern`
///
/// The removal is destructive, so the affected bookmarks are listed and the
/// change must be confirmed before it is committed. Returns `Ok(None)` when
/// the user declines; the caller then exits without touching the store.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty pattern, `InvalidPattern` for a
/// malformed regex, and `NotFound` when nothing matches.
pub fn execute(
    tree: BookmarkTree,
    pattern: &str,
    input: &dyn UserInput,
    quiet: bool,
) -> Result<Option<BookmarkTree>> {
    if pattern.is_empty() {
        return Err(BmarkrError::InvalidInput(
            "Removal pattern cannot be empty".into(),
        ));
    }

    let url_matcher = Matcher::url(pattern)?;
    let title_matcher = Matcher::title(pattern)?;

    let mut doomed = tree.collect_matches(&url_matcher);
    for item in tree.collect_matches(&title_matcher) {
        if !doomed.iter().any(|b| b.id == item.id) {
            doomed.push(item);
        }
    }
    if doomed.is_empty() {
        return Err(BmarkrError::NotFound(format!(
            "Could not locate a bookmark matching \"{pattern}\""
        )));
    }

    if !quiet {
        for item in &doomed {
            println!(
                "Removing bookmark {}",
                format!("\"{}\"", display_name(item)).red()
            );
        }
    }

    let prompt = format!(
        "Remove {} bookmark(s) matching \"{pattern}\" in either title or URL?",
        doomed.len()
    );
    if input.prompt_confirm(&prompt, false)? != Some(true) {
        return Ok(None);
    }

    // Cumulative: anything matching by either field goes
    let updated = tree
        .remove_matching(&url_matcher)
        .remove_matching(&title_matcher);
    Ok(Some(updated))
}
