//! Interactive terminal UI.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::io::Write;

use crate::error::{Result, TrailheadError};

use super::{should_use_colors, TrailheadTheme, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: TrailheadTheme,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool) -> Self {
        let theme = if should_use_colors() {
            TrailheadTheme::new()
        } else {
            TrailheadTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            interactive,
        }
    }

    /// Dialoguer theme without the default yellow `?` prefix.
    fn prompt_theme() -> ColorfulTheme {
        ColorfulTheme {
            prompt_prefix: style(String::new()),
            ..ColorfulTheme::default()
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.success.apply_to(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.warning.apply_to(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.error.apply_to(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        let rule = "=".repeat(60);
        writeln!(
            self.term,
            "\n{}\n{}\n{}",
            self.theme.dim.apply_to(&rule),
            self.theme.header.apply_to(title),
            self.theme.dim.apply_to(&rule)
        )
        .ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            // No terminal to ask on; never assume consent for installs.
            return Ok(false);
        }

        Confirm::with_theme(&Self::prompt_theme())
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(|e| TrailheadError::Io(e.into()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive))
}
