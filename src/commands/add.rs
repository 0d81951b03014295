//! Add a bookmark to a named folder

use colored::Colorize;
use uuid::Uuid;

use super::{resolve_folder, Result};
use crate::node::Bookmark;
use crate::tree::BookmarkTree;
use crate::ui::UserInput;
use crate::BmarkrError;

/// Add a new bookmark with the given title and URL to the folder named
/// `folder_title`, appending it after the folder's existing children
///
/// The new leaf gets a freshly generated UUID and the standard leaf type
/// tag. Validation happens before the tree is touched.
///
/// # Errors
///
/// Returns `InvalidInput` when `title` or `url` is empty, and whatever
/// [`resolve_folder`] raises for the destination.
pub fn execute(
    tree: BookmarkTree,
    title: &str,
    url: &str,
    folder_title: &str,
    input: &dyn UserInput,
    quiet: bool,
) -> Result<BookmarkTree> {
    if title.is_empty() {
        return Err(BmarkrError::InvalidInput(
            "Bookmark title cannot be empty".into(),
        ));
    }
    if url.is_empty() {
        return Err(BmarkrError::InvalidInput(
            "Bookmark URL cannot be empty".into(),
        ));
    }

    let dest_id = resolve_folder(&tree, folder_title, input, quiet)?;
    let bookmark = Bookmark::new(
        Uuid::new_v4().to_string().to_uppercase(),
        Some(title),
        Some(url),
    );

    if !quiet {
        println!(
            "Adding bookmark {} to folder \"{}\"",
            format!("\"{title}\"").green(),
            folder_title
        );
    }
    Ok(tree.insert_into_folder(&dest_id, vec![bookmark.into()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_tree;
    use crate::ui::MockInput;

    fn ids_in(tree: &BookmarkTree) -> Vec<String> {
        fn walk(children: &[crate::node::BookmarkNode], out: &mut Vec<String>) {
            for child in children {
                out.push(child.id().to_string());
                walk(child.children(), out);
            }
        }
        let mut out = vec![tree.root.id.clone()];
        walk(&tree.root.children, &mut out);
        out
    }

    #[test]
    fn test_add_appends_as_last_child() {
        let tree = sample_tree();
        let result = execute(
            tree,
            "New Bookmark",
            "http://new.com",
            "Nested",
            &MockInput::confirming(),
            true,
        )
        .unwrap();

        let nested = result.collect_matches(&crate::tree::Matcher::url("new").unwrap());
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].title.as_deref(), Some("New Bookmark"));
        assert_eq!(result.folder_address("f-nested"), "BookmarksBar.Work.Nested");
    }

    #[test]
    fn test_add_generates_a_fresh_identifier() {
        let tree = sample_tree();
        let before = ids_in(&tree);
        let result = execute(
            tree,
            "New",
            "http://new.com",
            "Nested",
            &MockInput::confirming(),
            true,
        )
        .unwrap();

        let after = ids_in(&result);
        assert_eq!(after.len(), before.len() + 1);
        let fresh: Vec<&String> = after.iter().filter(|id| !before.contains(id)).collect();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].len(), 36);
    }

    #[test]
    fn test_add_empty_title_is_invalid() {
        let result = execute(
            sample_tree(),
            "",
            "http://new.com",
            "Nested",
            &MockInput::confirming(),
            true,
        );
        assert!(matches!(result, Err(BmarkrError::InvalidInput(_))));
    }

    #[test]
    fn test_add_empty_url_is_invalid() {
        let result = execute(
            sample_tree(),
            "New",
            "",
            "Nested",
            &MockInput::confirming(),
            true,
        );
        assert!(matches!(result, Err(BmarkrError::InvalidInput(_))));
    }

    #[test]
    fn test_add_to_missing_folder_is_not_found() {
        let result = execute(
            sample_tree(),
            "New",
            "http://new.com",
            "Archive",
            &MockInput::confirming(),
            true,
        );
        assert!(matches!(result, Err(BmarkrError::NotFound(_))));
    }
}
