//! Header component renderer.
//!
//! This module renders the title bar with centered text, theme-aware colors,
//! and optional background styling, plus the error banner shown below it
//! after a failed operation.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar.
///
/// Displays the title and the number of visible brews centered horizontally
/// with bold styling and theme colors. Pads the line to fill the entire
/// terminal width.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE (n) [right padding]
/// ```
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) -> String {
    let title = format!("{} ({})", header.title, header.count);

    let mut line = String::new();
    line.push_str(Theme::bold());
    line.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        line.push_str(&Theme::bg(bg));
    }
    line.push_str(&center(&title, cols));
    line.push_str(Theme::reset());
    line
}

/// Renders the error banner in the danger color.
pub fn render_error_banner(message: &str, theme: &Theme, cols: usize) -> String {
    Theme::paint(&theme.colors.danger_fg, &center(&format!("⚠ {message}"), cols))
}
