//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component renders
//! a specific part of the interface into lines of ANSI-styled text.
//!
//! # Components
//!
//! - [`header`]: Title bar and error banner
//! - [`search`]: Search input box (border, query text, clear affordance)
//! - [`cards`]: Brew cards with stats, bloom, notes, and swipe state
//! - [`empty`]: Empty state and loading messages
//! - [`dialog`]: Delete confirmation frame
//! - [`form`]: Add-brew form
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Error banner, if any]
//! [Border]
//! [Search Bar - 3 lines]
//! [Cards | Empty state | Loading]
//! [Form, if open]
//! [Dialog, if open]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod dialog;
mod empty;
mod footer;
mod form;
mod header;
mod search;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListBody, UIViewModel};

use cards::render_cards;
use dialog::render_dialog;
use empty::{render_empty_state, render_loading};
use footer::render_footer;
use form::render_form;
use header::{render_error_banner, render_header};
use search::render_search_bar;

/// Renders a horizontal border line.
///
/// Used to separate UI sections (header/body, body/footer).
fn render_border(color: &str, cols: usize) -> String {
    Theme::paint(color, &"─".repeat(cols))
}

/// Lays out every section of the view model, top to bottom.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = vec![render_header(&vm.header, theme, cols)];
    if let Some(error) = &vm.error_banner {
        lines.push(render_error_banner(error, theme, cols));
    }
    lines.push(render_border(&theme.colors.border, cols));
    lines.extend(render_search_bar(&vm.search_bar, theme, cols));

    match &vm.body {
        ListBody::Loading(message) => lines.extend(render_loading(message, theme, cols)),
        ListBody::Empty(empty) => lines.extend(render_empty_state(empty, theme, cols)),
        ListBody::Cards(cards) => lines.extend(render_cards(cards, theme, cols)),
    }

    if let Some(form) = &vm.form {
        lines.extend(render_form(form, theme, cols));
    }
    if let Some(dialog) = &vm.dialog {
        lines.extend(render_dialog(dialog, theme, cols));
    }

    lines.push(render_border(&theme.colors.border, cols));
    lines.push(render_footer(&vm.footer, theme, cols));
    lines
}
