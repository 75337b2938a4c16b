//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two are built in (`catppuccin-mocha`, the
//! default, and `catppuccin-latte`); a custom one can be loaded from a file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! field_border = "#585b70"
//! field_focus = "#f5c2e7"
//! droppable_bg = "#313244"
//! drag_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! active_list_fg = "#a6e3a1"
//! finished_list_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use projboard::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! assert!(Theme::fg(&theme.colors.header_fg).starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::error::{ProjboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected item foreground color.
    pub selection_fg: String,
    /// Selected item background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (descriptions, footer, idle field labels).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Separator between a form label and its value.
    pub field_border: String,
    /// Label color of the field being edited.
    pub field_focus: String,

    /// Background of a list that a drag is hovering over.
    pub droppable_bg: String,
    /// Foreground of the item being dragged.
    pub drag_fg: String,

    pub empty_state_fg: String,

    /// Heading color of the active list.
    pub active_list_fg: String,
    /// Heading color of the finished list.
    pub finished_list_fg: String,

    /// Color of error notices.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ProjboardError::Io`] if the file cannot be read and
    /// [`ProjboardError::Theme`] if it is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ProjboardError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ProjboardError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple; malformed colors become white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case("catppuccin-mocha")]
    #[case("catppuccin-latte")]
    fn builtin_themes_parse(#[case] name: &str) {
        let theme = Theme::from_name(name).unwrap();
        assert_eq!(theme.name, name);
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[rstest]
    #[case("#ff8000", "\u{1b}[38;2;255;128;0m")]
    #[case("1e1e2e", "\u{1b}[38;2;30;30;46m")]
    #[case("#fff", "\u{1b}[38;2;255;255;255m")]
    fn hex_colors_become_escapes(#[case] hex: &str, #[case] expected: &str) {
        assert_eq!(Theme::fg(hex), expected);
    }

    #[test]
    fn theme_file_round_trips() {
        let theme = Theme::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, theme.name);
        assert_eq!(loaded.colors.droppable_bg, theme.colors.droppable_bg);
    }

    #[test]
    fn incomplete_theme_is_a_theme_error() {
        let err = Theme::from_toml("name = \"broken\"\n[colors]\nheader_fg = \"#000000\"\n").unwrap_err();
        assert!(matches!(err, ProjboardError::Theme(_)));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let err = Theme::from_file("/nonexistent/projboard/theme.toml").unwrap_err();
        assert!(matches!(err, ProjboardError::Io(_)));
    }
}
