//! Mock user input for testing
//!
//! Returns predetermined answers without requiring user interaction.

use super::input::{Result, UserInput};

/// Mock input that answers prompts from a script
#[derive(Debug, Clone, Default)]
pub struct MockInput {
    /// Answer for confirmation prompts (`None` simulates ESC)
    pub confirm_answer: Option<bool>,
    /// Answer for selection prompts (`None` simulates ESC)
    pub selection: Option<usize>,
}

impl MockInput {
    /// Mock that confirms every prompt and selects the first candidate
    #[must_use]
    pub const fn confirming() -> Self {
        Self {
            confirm_answer: Some(true),
            selection: Some(0),
        }
    }

    /// Mock that declines confirmation prompts
    #[must_use]
    pub const fn declining() -> Self {
        Self {
            confirm_answer: Some(false),
            selection: Some(0),
        }
    }

    /// Mock that picks the given index in selection prompts
    #[must_use]
    pub const fn selecting(index: usize) -> Self {
        Self {
            confirm_answer: Some(true),
            selection: Some(index),
        }
    }

    /// Mock that simulates the user cancelling every prompt
    #[must_use]
    pub const fn cancelled() -> Self {
        Self {
            confirm_answer: None,
            selection: None,
        }
    }
}

impl UserInput for MockInput {
    fn prompt_confirm(&self, _prompt: &str, _default: bool) -> Result<Option<bool>> {
        Ok(self.confirm_answer)
    }

    fn prompt_select(&self, _prompt: &str, items: &[String]) -> Result<Option<usize>> {
        // Stay inside the presented options, like a real selector would
        Ok(self.selection.filter(|i| *i < items.len()))
    }
}
