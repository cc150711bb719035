//! Empty state and loading renderers.
//!
//! This module renders the message displayed in place of the brew list when
//! nothing is visible or a request is in flight.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] ICON [right padding]
/// [left padding] message [right padding]
/// [blank line]
/// ```
///
/// Both lines are horizontally centered. The icon uses the `empty_state_fg`
/// theme color, and the message uses `text_dim`.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) -> Vec<String> {
    vec![
        String::new(),
        Theme::paint(&theme.colors.empty_state_fg, &center(&empty.icon, cols)),
        Theme::paint(&theme.colors.text_dim, &center(&empty.message, cols)),
        String::new(),
    ]
}

/// Renders the loading message.
pub fn render_loading(message: &str, theme: &Theme, cols: usize) -> Vec<String> {
    vec![
        String::new(),
        Theme::paint(&theme.colors.empty_state_fg, &center(message, cols)),
        String::new(),
    ]
}
