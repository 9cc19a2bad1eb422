//! Visual theme and styling.

use console::Style;

/// Trailhead's visual theme.
#[derive(Debug, Clone)]
pub struct TrailheadTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for TrailheadTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailheadTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }
}

/// Whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and falls back to TTY detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
