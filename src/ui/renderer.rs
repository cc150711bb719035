//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The result is returned as a string so the caller decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use brewlog::app::AppState;
//! use brewlog::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let screen = render(&state, 80);
//! assert!(screen.contains("No brews yet"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Narrowest layout the renderer produces.
const MIN_COLS: usize = 40;

/// Renders the UI for the current state.
///
/// Computes the view model from application state and lays out every
/// section for a terminal `cols` columns wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let _span = tracing::trace_span!("render", cols).entered();
    let mut screen = components::render_layout(vm, theme, cols.max(MIN_COLS)).join("\n");
    screen.push('\n');
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brew::fixtures::brew;
    use crate::ui::helpers::strip_ansi;

    fn screen(state: &AppState) -> String {
        strip_ansi(&render(state, 80))
    }

    #[test]
    fn empty_screen_has_title_search_and_message() {
        let state = AppState::new(Theme::default());
        let text = screen(&state);

        assert!(text.contains("BrewLog: Your Coffee Journey (0)"));
        assert!(text.contains("Search by bean type, brew method, or details..."));
        assert!(text.contains("☕"));
        assert!(text.contains("No brews yet. Time to make some coffee!"));
    }

    #[test]
    fn error_banner_and_cards_render() {
        let mut state = AppState::new(Theme::default());
        state.brews = vec![brew(1, "Ethiopian"), brew(2, "Kenya")];
        state.refresh_visible();
        state.error = Some("Failed to add brew. Please try again.".to_string());

        let text = screen(&state);
        assert!(text.contains("⚠ Failed to add brew. Please try again."));
        assert!(text.contains("#1 Ethiopian  [V60]"));
        assert!(text.contains("#2 Kenya  [V60]"));
        assert!(!text.contains("No brews yet"));
    }

    #[test]
    fn narrow_terminal_is_widened() {
        let state = AppState::new(Theme::default());
        let text = strip_ansi(&render(&state, 10));
        assert!(text.lines().any(|line| line.chars().count() >= MIN_COLS));
    }
}
