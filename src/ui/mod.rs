//! User interaction abstraction
//!
//! The engine never talks to a terminal directly: confirmation prompts and
//! folder disambiguation go through the [`UserInput`] trait. The CLI binary
//! uses the `dialoguer`-backed implementation; tests use the scripted mock.

pub mod input;
pub mod mock;

pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::MockInput;
