//! Terminal output and confirmation prompts.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use trailhead::ui::{create_ui, UserInterface};
//!
//! let mut ui = create_ui(false);
//! ui.show_header("TOOLCHAIN CHECK");
//! ui.success("All tools present");
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, TrailheadTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a phase header/banner.
    fn show_header(&mut self, title: &str);

    /// Ask a yes/no question. `default` is used when the user just presses
    /// enter; non-interactive implementations return `default` or decline.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
