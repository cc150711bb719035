//! Color palettes for the brew journal and the ANSI codes that apply them.
//!
//! Palettes come from a built-in name or a TOML file (`theme_file` in the
//! config). Colors are hex strings turned into 24-bit escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark, peach badges on a mocha base (default)
//! - `catppuccin-latte`: light, for bright terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f5e0dc"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#fab387"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! method_badge_fg = "#fab387"
//! bloom_fg = "#a6e3a1"
//! danger_fg = "#f38ba8"
//! dialog_border = "#f38ba8"
//! form_border = "#cba6f7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use brewlog::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::{BrewlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for each part of the screen.
///
/// Only `header_bg` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, placeholders, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state and loading message color.
    pub empty_state_fg: String,

    /// Brew method badge color.
    pub method_badge_fg: String,
    /// Bloom annotation color.
    pub bloom_fg: String,

    /// Error banner, validation messages, and revealed delete action.
    pub danger_fg: String,

    /// Delete confirmation frame color.
    pub dialog_border: String,
    /// Add-brew form frame color.
    pub form_border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlogError::Theme`] if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brewlog::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return Err(BrewlogError::Theme(format!("unknown theme {name:?}"))),
        };

        toml::from_str(toml_str)
            .map_err(|e| BrewlogError::Theme(format!("built-in theme {name:?} is invalid: {e}")))
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BrewlogError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| BrewlogError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: a theme file wins over a name.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Theme::from_file`] or [`Theme::from_name`].
    pub fn load(name: &str, file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::from_name(name),
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
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

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// ```rust
    /// use brewlog::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Wraps `text` in a foreground color and a trailing reset.
    #[must_use]
    pub fn paint(hex: &str, text: &str) -> String {
        format!("{}{text}{}", Self::fg(hex), Self::reset())
    }

    /// Palette of plain white text, used when the built-in theme is unusable.
    fn plain() -> Self {
        let white = "#ffffff".to_string();
        Self {
            name: "plain".to_string(),
            colors: ThemeColors {
                header_fg: white.clone(),
                header_bg: None,
                text_normal: white.clone(),
                text_dim: white.clone(),
                border: white.clone(),
                search_bar_border: white.clone(),
                match_highlight_fg: "#000000".to_string(),
                match_highlight_bg: white.clone(),
                empty_state_fg: white.clone(),
                method_badge_fg: white.clone(),
                bloom_fg: white.clone(),
                danger_fg: white.clone(),
                dialog_border: white.clone(),
                form_border: white,
            },
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "default theme unavailable, using plain colors");
            Self::plain()
        })
    }
}
