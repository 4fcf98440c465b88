//! Visual theme and styling.

use console::Style;

/// Hoopdata's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for section headers (cyan bold).
    pub header: Style,
    /// Style for banner rules (dim).
    pub border: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = Theme::plain();
        let msg = theme.format_success("Data ready");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Data ready"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = Theme::plain();
        let msg = theme.format_warning("Problems found");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Problems found"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = Theme::plain();
        let msg = theme.format_error("broken.csv");
        assert!(msg.contains("✗"));
        assert!(msg.contains("broken.csv"));
    }

    #[test]
    fn default_matches_new() {
        // Styles don't implement PartialEq; spot-check one applied string
        let a = Theme::default().format_success("x");
        let b = Theme::new().format_success("x");
        assert_eq!(a, b);
    }
}
