//! Command-line interface definitions and parsing
//!
//! Defines the CLI structure for bmarkr using the `clap` crate.
//!
//! # Commands
//!
//! - **add**: Add a bookmark to a named folder
//! - **move**: Move bookmarks matching a pattern into a named folder
//! - **remove**: Remove bookmarks matching a pattern
//!
//! A global `--quiet` flag suppresses informational output and a global
//! `--file` flag points the tool at a bookmarks file other than the
//! configured one.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(name = "bmarkr")]
#[command(about = "Manage the Safari bookmark tree", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Operate on this bookmarks file instead of the configured one
    #[arg(long = "file", global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a bookmark to a named folder
    #[command(visible_alias = "a")]
    Add {
        /// Bookmark title
        title: String,
        /// Bookmark URL
        url: String,
        /// Destination folder title
        folder: String,
    },

    /// Move bookmarks matching a regex pattern into a named folder
    #[command(visible_alias = "mv")]
    Move {
        /// Regex matched against bookmark titles and URLs
        pattern: String,
        /// Destination folder title
        folder: String,
    },

    /// Remove bookmarks matching a regex pattern (asks for confirmation)
    #[command(visible_alias = "rm")]
    Remove {
        /// Regex matched against bookmark titles and URLs
        pattern: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "bmarkr",
            "add",
            "My Bookmark",
            "http://example.com",
            "Work",
        ])
        .unwrap();

        match cli.command {
            Commands::Add { title, url, folder } => {
                assert_eq!(title, "My Bookmark");
                assert_eq!(url, "http://example.com");
                assert_eq!(folder, "Work");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_move_with_quiet() {
        let cli = Cli::try_parse_from(["bmarkr", "-q", "move", "news", "Archive"]).unwrap();

        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Move { .. }));
    }

    #[test]
    fn test_parse_remove_with_file_override() {
        let cli =
            Cli::try_parse_from(["bmarkr", "remove", "news", "--file", "/tmp/Bookmarks.plist"])
                .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("/tmp/Bookmarks.plist")));
        assert!(matches!(cli.command, Commands::Remove { .. }));
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["bmarkr", "add", "Title Only"]).is_err());
        assert!(Cli::try_parse_from(["bmarkr", "move", "pattern-only"]).is_err());
        assert!(Cli::try_parse_from(["bmarkr", "remove"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["bmarkr", "rename", "x"]).is_err());
    }

    #[test]
    fn test_aliases() {
        assert!(Cli::try_parse_from(["bmarkr", "a", "T", "http://u", "F"]).is_ok());
        assert!(Cli::try_parse_from(["bmarkr", "mv", "p", "F"]).is_ok());
        assert!(Cli::try_parse_from(["bmarkr", "rm", "p"]).is_ok());
    }
}
