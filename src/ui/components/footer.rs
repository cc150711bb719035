//! Footer component renderer.
//!
//! This module renders the footer help bar with centered command hints.

use crate::ui::helpers::{center, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar.
///
/// Displays command hints centered horizontally with dimmed styling. If the
/// help text exceeds terminal width, it is truncated to fit.
pub fn render_footer(footer: &FooterInfo, theme: &Theme, cols: usize) -> String {
    let help_text = truncate(&footer.keybindings, cols);
    format!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        center(&help_text, cols),
        Theme::reset()
    )
}
