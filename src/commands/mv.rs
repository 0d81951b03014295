//! Move bookmarks matching a pattern into a named folder

use colored::Colorize;

use super::{display_name, resolve_folder, Result};
use crate::tree::{BookmarkTree, Matcher};
use crate::ui::UserInput;
use crate::BmarkrError;

/// Move every bookmark whose URL or title matches `pattern` into the folder
/// named `folder_title`
///
/// URL matches come first, then title matches not already found by URL,
/// deduplicated by identifier. The destination is resolved once; each item
/// is then relocated with the evolving tree threaded through every step, so
/// moving several items in one invocation accumulates correctly.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty pattern, `InvalidPattern` for a
/// malformed regex, `NotFound` when nothing matches, and whatever
/// [`resolve_folder`] raises for the destination.
pub fn execute(
    tree: BookmarkTree,
    pattern: &str,
    folder_title: &str,
    input: &dyn UserInput,
    quiet: bool,
) -> Result<BookmarkTree> {
    if pattern.is_empty() {
        return Err(BmarkrError::InvalidInput(
            "Search pattern cannot be empty".into(),
        ));
    }

    let mut items = tree.collect_matches(&Matcher::url(pattern)?);
    for item in tree.collect_matches(&Matcher::title(pattern)?) {
        if !items.iter().any(|b| b.id == item.id) {
            items.push(item);
        }
    }
    if items.is_empty() {
        return Err(BmarkrError::NotFound(format!(
            "Could not locate a bookmark matching \"{pattern}\""
        )));
    }

    let dest_id = resolve_folder(&tree, folder_title, input, quiet)?;

    let mut updated = tree;
    for item in &items {
        if !quiet {
            println!(
                "Moving {} to folder \"{}\"",
                format!("\"{}\"", display_name(item)).green(),
                folder_title
            );
        }
        updated = updated.move_node(item, &item.id, &dest_id);
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::BookmarkNode;
    use crate::testing::{folder, leaf, sample_tree, tree};
    use crate::ui::MockInput;

    fn children_of(tree: &BookmarkTree, folder_id: &str) -> Vec<String> {
        fn find<'a>(
            children: &'a [BookmarkNode],
            id: &str,
        ) -> Option<&'a crate::node::Folder> {
            for child in children {
                if let BookmarkNode::Folder(f) = child {
                    if f.id == id {
                        return Some(f);
                    }
                    if let Some(found) = find(&f.children, id) {
                        return Some(found);
                    }
                }
            }
            None
        }
        find(&tree.root.children, folder_id)
            .map(|f| f.children.iter().map(|c| c.id().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_move_single_match_by_url() {
        let result = execute(
            sample_tree(),
            "news",
            "Nested",
            &MockInput::confirming(),
            true,
        )
        .unwrap();

        assert_eq!(
            children_of(&result, "f-nested"),
            vec!["b-nested".to_string(), "b-bar".to_string()]
        );
        assert!(!children_of(&result, "f-bar").contains(&"b-bar".to_string()));
    }

    #[test]
    fn test_move_accumulates_across_items() {
        // Two bookmarks match; both must end up at the destination, which
        // requires threading the tree between the per-item move steps
        let start = tree(vec![
            folder(
                "f-src",
                Some("Source"),
                vec![
                    leaf("b1", Some("blog one"), Some("http://one.example.com")),
                    leaf("b2", Some("blog two"), Some("http://two.example.com")),
                ],
            ),
            folder("f-dst", Some("Archive"), vec![]),
        ]);
        let result = execute(start, "blog", "Archive", &MockInput::confirming(), true).unwrap();

        assert_eq!(
            children_of(&result, "f-dst"),
            vec!["b1".to_string(), "b2".to_string()]
        );
        assert!(children_of(&result, "f-src").is_empty());
    }

    #[test]
    fn test_move_merges_url_and_title_matches_without_duplicates() {
        // "example" hits b1 by both URL and title; it must move exactly once
        let start = tree(vec![
            folder(
                "f-src",
                Some("Source"),
                vec![leaf("b1", Some("example site"), Some("http://example.com"))],
            ),
            folder("f-dst", Some("Archive"), vec![]),
        ]);
        let result = execute(start, "example", "Archive", &MockInput::confirming(), true).unwrap();

        assert_eq!(children_of(&result, "f-dst"), vec!["b1".to_string()]);
    }

    #[test]
    fn test_move_empty_pattern_is_invalid() {
        let result = execute(sample_tree(), "", "Work", &MockInput::confirming(), true);
        assert!(matches!(result, Err(BmarkrError::InvalidInput(_))));
    }

    #[test]
    fn test_move_no_match_is_not_found() {
        let result = execute(
            sample_tree(),
            "zzz-no-such-bookmark",
            "Work",
            &MockInput::confirming(),
            true,
        );
        assert!(matches!(result, Err(BmarkrError::NotFound(_))));
    }

    #[test]
    fn test_move_resolves_duplicate_destination_titles() {
        // Two folders titled "Work"; the mock picks the second candidate
        let result = execute(
            sample_tree(),
            "news",
            "Work",
            &MockInput::selecting(1),
            true,
        )
        .unwrap();

        assert_eq!(
            children_of(&result, "f-work2"),
            vec!["b-other".to_string(), "b-bar".to_string()]
        );
    }
}
