//! User input abstraction layer
//!
//! Backend-agnostic interface for the two interactive moments the tool has:
//! confirming a destructive change and picking one folder among several
//! candidates sharing a title.

use std::io;

/// Trait for user input operations
///
/// Abstracts the input mechanism so commands can be driven by `dialoguer`
/// in the CLI and by scripted answers in tests.
pub trait UserInput {
    /// Prompt user for confirmation (yes/no)
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bool))` - User confirmed (true) or declined (false)
    /// * `Ok(None)` - User cancelled (ESC)
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the input operation fails.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Prompt user to select one item from a list
    ///
    /// Implementations must only ever return an index into `items`,
    /// re-prompting on invalid input.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Index of the selected item
    /// * `Ok(None)` - User cancelled (ESC)
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the input operation fails.
    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        use dialoguer::Select;

        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
