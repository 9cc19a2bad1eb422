//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirmation answers are queued
//! ahead of time.
//!
//! # Example
//!
//! ```
//! use trailhead::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! ui.message("Checking toolchain");
//! assert!(ui.confirm("Install?", false).unwrap());
//! assert!(ui.messages().contains(&"Checking toolchain".to_string()));
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    confirms_asked: Vec<String>,
    confirm_answers: VecDeque<bool>,
}

impl MockUI {
    /// Create a new MockUI that behaves as interactive.
    pub fn new() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    /// Queue an answer for the next confirmation prompt.
    ///
    /// When the queue is exhausted, `confirm` falls back to declining.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the questions asked via `confirm`.
    pub fn confirms_asked(&self) -> &[String] {
        &self.confirms_asked
    }

    /// Check whether any captured output contains the given text.
    pub fn output_contains(&self, text: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.headers)
            .any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn confirm(&mut self, question: &str, _default: bool) -> Result<bool> {
        self.confirms_asked.push(question.to_string());
        Ok(self.confirm_answers.pop_front().unwrap_or(false))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
