//! Add-brew form renderer.
//!
//! Renders the form as a framed block: one line per text input (value or dimmed
//! placeholder), the method dropdown, the brew-time field with its picker, and
//! any validation messages.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

/// Heading of the form frame.
pub const FORM_TITLE: &str = "Add New Brew";

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 24;

pub fn render_form(form: &FormInfo, theme: &Theme, cols: usize) -> Vec<String> {
    let border = Theme::fg(&theme.colors.form_border);
    let reset = Theme::reset();
    let value_width = cols.saturating_sub(LABEL_WIDTH + 4);

    let row = |label: &str, value: String| format!("{border}│{reset} {label:<LABEL_WIDTH$} {value}");

    let mut lines = vec![format!(
        "{border}┌─ {}{FORM_TITLE}{reset}{border} {}{reset}",
        Theme::bold(),
        "─".repeat(cols.saturating_sub(FORM_TITLE.len() + 4))
    )];

    for field in &form.fields {
        let value = if field.value.is_empty() {
            Theme::paint(&theme.colors.text_dim, &truncate(&field.placeholder, value_width))
        } else {
            truncate(&field.value, value_width)
        };
        lines.push(row(&format!("{} ({})", field.label, field.key), value));
    }

    lines.push(row("Brew Method (method)", form.method.clone()));
    lines.push(row(
        "",
        Theme::paint(&theme.colors.text_dim, &truncate(&form.method_options.join(" | "), value_width)),
    ));

    lines.push(row("Brew Time (time)", form.brew_time.clone()));
    if form.picker_open {
        lines.push(row(
            "",
            Theme::paint(&theme.colors.method_badge_fg, "min 0-59 │ sec 0-59 │ done"),
        ));
    }

    for error in &form.errors {
        lines.push(row("", Theme::paint(&theme.colors.danger_fg, error)));
    }

    lines.push(row("", format!("{}[cancel]{reset}  [submit]", Theme::fg(&theme.colors.text_dim))));
    lines.push(format!("{border}└{}{reset}", "─".repeat(cols.saturating_sub(1))));
    lines
}
