//! Delete confirmation renderer.

use crate::ui::helpers::{center, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogInfo;

/// Widest the dialog frame grows.
const MAX_DIALOG_WIDTH: usize = 52;

/// Renders the confirmation as a centered frame.
///
/// ```text
/// ┌──────────────────────────────┐
/// │ Delete Brew                  │
/// │ Are you sure you want to ... │
/// │          [cancel]  [delete]  │
/// └──────────────────────────────┘
/// ```
pub fn render_dialog(dialog: &DialogInfo, theme: &Theme, cols: usize) -> Vec<String> {
    let width = MAX_DIALOG_WIDTH.min(cols.saturating_sub(2)).max(12);
    let inner = width - 4;
    let border = Theme::fg(&theme.colors.dialog_border);
    let reset = Theme::reset();

    let framed = |text: String, visible: usize| {
        let line = format!(
            "{border}│{reset} {text}{} {border}│{reset}",
            " ".repeat(inner.saturating_sub(visible))
        );
        center(&line, cols)
    };

    let mut lines = vec![center(&format!("{border}┌{}┐{reset}", "─".repeat(width - 2)), cols)];
    lines.push(framed(
        format!("{}{}{reset}", Theme::bold(), dialog.title),
        dialog.title.chars().count(),
    ));
    for line in wrap(&dialog.message, inner) {
        let visible = line.chars().count();
        lines.push(framed(line, visible));
    }
    let buttons = format!(
        "{}[cancel]{reset}  {}[delete]{reset}",
        Theme::fg(&theme.colors.text_dim),
        Theme::fg(&theme.colors.danger_fg)
    );
    let buttons_len = "[cancel]  [delete]".len();
    lines.push(framed(
        format!("{}{buttons}", " ".repeat(inner.saturating_sub(buttons_len))),
        inner.max(buttons_len),
    ));
    lines.push(center(&format!("{border}└{}┘{reset}", "─".repeat(width - 2)), cols));
    lines
}
