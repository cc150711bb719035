//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the query
//! text (or placeholder), and the clear affordance.

use crate::ui::helpers::{truncate, visible_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Label of the clear affordance.
const CLEAR_LABEL: &str = "[x] clear";

/// Renders the search input box.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────┐
/// [margin] │ Search: query     [x] clear │
/// [margin] └──────────────────────────┘
/// ```
///
/// The placeholder is shown dimmed while the query is empty, and the clear
/// affordance only while it is not.
pub fn render_search_bar(search: &SearchBarInfo, theme: &Theme, cols: usize) -> Vec<String> {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let clear = if search.show_clear { CLEAR_LABEL } else { "" };
    let text_width = inner_width.saturating_sub(clear.len() + 10);
    let text = if search.query.is_empty() {
        Theme::paint(&theme.colors.text_dim, &truncate(&search.placeholder, text_width))
    } else {
        Theme::paint(&theme.colors.text_normal, &truncate(&search.query, text_width))
    };
    let content = format!(" Search: {text}");
    let padding = inner_width.saturating_sub(visible_len(&content) + clear.len() + 1);

    vec![
        format!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset()),
        format!(
            "{margin}{border}│{}{content}{}{}{clear}{border} │{}",
            Theme::reset(),
            " ".repeat(padding),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ),
        format!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset()),
    ]
}
