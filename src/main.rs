//! Bmarkr CLI application entry point
//!
//! Command-line manager for the Safari bookmark tree.
//!
//! # Usage
//!
//! ```bash
//! # Add a bookmark to the folder titled "Work"
//! bmarkr add "Rust Blog" "https://blog.rust-lang.org" Work
//!
//! # Move every bookmark matching a pattern into "Archive"
//! bmarkr move "example\.com" Archive
//!
//! # Remove bookmarks matching a pattern (asks for confirmation)
//! bmarkr remove "old-host\.com"
//!
//! # Work on a copy instead of the live store
//! bmarkr --file ./Bookmarks.plist remove "news"
//! ```
//!
//! Before any change the unmodified store is copied to the backup path
//! (`Bookmarks.plist` in the working directory unless configured
//! otherwise); a failed backup aborts with no changes made.

use std::process;

use bmarkr::{
    cli::{Cli, Commands},
    commands,
    config::BmarkrConfig,
    store,
    ui::DialoguerInput,
    BmarkrError,
};

type Result<T> = std::result::Result<T, BmarkrError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Load configuration, parse arguments, run one operation against the
/// store and persist the result
///
/// # Errors
///
/// Returns `BmarkrError` if configuration loading, store I/O, or the
/// dispatched command fails.
fn run() -> Result<()> {
    let config = BmarkrConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let source = cli
        .file
        .clone()
        .or_else(|| config.store_path())
        .ok_or_else(|| {
            BmarkrError::InvalidInput(
                "Could not determine the bookmarks file path; pass --file <PATH> or set bookmarks_path in the config".into(),
            )
        })?;

    let tree = store::load(&source)?;

    // Fail-fast: no mutation is attempted unless the backup succeeded
    let backup_path = config.backup_target();
    store::backup(&source, &backup_path)?;
    if !quiet {
        println!(
            "Saved unmodified backup of the bookmarks file at {}",
            backup_path.display()
        );
    }

    let input = DialoguerInput::new();

    match cli.command {
        Commands::Add { title, url, folder } => {
            let updated = commands::add(tree, &title, &url, &folder, &input, quiet)?;
            store::save(&updated, &source)?;
        }
        Commands::Move { pattern, folder } => {
            let updated = commands::mv(tree, &pattern, &folder, &input, quiet)?;
            store::save(&updated, &source)?;
        }
        Commands::Remove { pattern } => {
            match commands::remove(tree, &pattern, &input, quiet)? {
                Some(updated) => store::save(&updated, &source)?,
                None => {
                    if !quiet {
                        println!("Change was not confirmed - exiting with no change made");
                    }
                }
            }
        }
    }

    Ok(())
}
