//! Visual theme and styling.

use console::Style;

/// Terminal styling for formatted output.
#[derive(Debug, Clone)]
pub struct AbxTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
    /// Style for preferred-regimen markers (green bold).
    pub preferred: Style,
}

impl Default for AbxTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AbxTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            key: Style::new().bold(),
            value: Style::new(),
            preferred: Style::new().green().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            key: Style::new(),
            value: Style::new(),
            preferred: Style::new(),
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

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("℞"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a key-value line.
    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!(
            "{} {}",
            self.key.apply_to(format!("{}:", key)),
            self.value.apply_to(value)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = AbxTheme::plain();
        let msg = theme.format_success("Dataset valid");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Dataset valid"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = AbxTheme::plain();
        let msg = theme.format_warning("No dose recorded");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("No dose recorded"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = AbxTheme::plain();
        let msg = theme.format_error("Unknown antibiotic");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Unknown antibiotic"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = AbxTheme::plain();
        let msg = theme.format_header("Meropenem");
        assert!(msg.contains("Meropenem"));
        assert!(msg.contains("℞"));
    }

    #[test]
    fn theme_formats_key_value() {
        let theme = AbxTheme::plain();
        let msg = theme.format_key_value("Category", "carbapenem");
        assert_eq!(msg, "Category: carbapenem");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = AbxTheme::default();
        let new = AbxTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
