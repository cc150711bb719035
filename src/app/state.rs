//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! client, along with the methods that keep the visible list in step with the
//! search query and turn state into a [`UIViewModel`]. It is the single source
//! of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (all brews, in newest-first order) from
//! derived state (the filtered, visible list) to keep the two consistent:
//! every change to either the brews or the query goes through
//! [`AppState::refresh_visible`].
//!
//! # State Components
//!
//! - **Brews**: Master list as last confirmed by the server (plus optimistic edits)
//! - **Search**: Current query
//! - **List**: Visible brews with per-entry gesture and dialog state
//! - **Form**: The add-brew form, when open
//! - **Error / loading**: Banner text and in-flight indicator
//! - **Pending deletes**: Optimistically removed brews awaiting confirmation
//!
//! # Example
//!
//! ```rust
//! use brewlog::app::AppState;
//! use brewlog::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.refresh_visible();
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.header.count, 0);
//! ```

use crate::app::modes::Overlay;
use crate::components::brew_list::{EMPTY_ICON, EMPTY_MESSAGE};
use crate::components::confirm;
use crate::components::search::PLACEHOLDER;
use crate::components::{AddBrewForm, BrewList, FormField, PointerBus, SearchBar, SwipeStyle};
use crate::domain::{format_measure, Brew, BrewMethod};
use crate::ui::helpers::match_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BrewCard, DialogInfo, EmptyState, FooterInfo, FormFieldInfo, FormInfo, HeaderInfo, ListBody,
    SearchBarInfo, UIViewModel,
};
use std::collections::HashMap;

/// Title shown in the header bar.
pub const APP_TITLE: &str = "BrewLog: Your Coffee Journey";

/// Text shown in place of the list while a request is in flight.
pub const LOADING_MESSAGE: &str = "Loading your brews...";

/// Prompt shown while no brew method is selected.
const METHOD_PROMPT: &str = "Select a brew method";

/// A brew removed from the list before the server confirmed the deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    /// Index in `brews` the brew was removed from.
    pub position: usize,
    pub brew: Brew,
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. View models are computed on demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// All known brews, newest first.
    pub brews: Vec<Brew>,

    /// Current search query.
    pub search: SearchBar,

    /// Brews matching the query, with per-entry interaction state.
    pub list: BrewList,

    /// The add-brew form, while it is open.
    pub form: Option<AddBrewForm>,

    /// Generic message of the last failed operation.
    pub error: Option<String>,

    /// Whether a load or create request is in flight.
    pub is_loading: bool,

    /// Brews removed optimistically, keyed by id.
    pub pending_deletes: HashMap<i64, PendingDelete>,

    /// Outside-click registry shared with every component.
    pub pointer_bus: PointerBus,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let pointer_bus = PointerBus::new();
        Self {
            brews: Vec::new(),
            search: SearchBar::new(),
            list: BrewList::new(pointer_bus.clone()),
            form: None,
            error: None,
            is_loading: false,
            pending_deletes: HashMap::new(),
            pointer_bus,
            theme,
        }
    }

    /// Re-applies the search query to `brews` and syncs the visible list.
    pub fn refresh_visible(&mut self) {
        let visible = self.search.filter(&self.brews);
        self.list.sync(visible);
    }

    /// Which overlay currently covers the list.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        if let Some(item) = self.list.confirming() {
            Overlay::DeleteConfirm { id: item.id() }
        } else if self.form.is_some() {
            Overlay::AddForm
        } else {
            Overlay::None
        }
    }

    /// Opens the add-brew form unless it is already open.
    ///
    /// Returns `true` if the form was opened.
    pub fn open_form(&mut self) -> bool {
        if self.form.is_some() {
            return false;
        }
        self.form = Some(AddBrewForm::new(self.pointer_bus.clone()));
        true
    }

    /// Removes the brew with `id`, remembering where it was.
    ///
    /// Returns `false` if no such brew is known.
    pub fn remove_optimistically(&mut self, id: i64) -> bool {
        let Some(position) = self.brews.iter().position(|brew| brew.id == id) else {
            return false;
        };
        let brew = self.brews.remove(position);
        self.pending_deletes.insert(id, PendingDelete { position, brew });
        self.refresh_visible();
        true
    }

    /// Puts an optimistically removed brew back where it was.
    ///
    /// Returns `false` if nothing was pending for `id`.
    pub fn restore_pending(&mut self, id: i64) -> bool {
        let Some(pending) = self.pending_deletes.remove(&id) else {
            return false;
        };
        if self.brews.iter().any(|brew| brew.id == id) {
            return false;
        }
        let position = pending.position.min(self.brews.len());
        self.brews.insert(position, pending.brew);
        self.refresh_visible();
        true
    }

    /// Computes a renderable UI view model from current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let body = if self.is_loading {
            ListBody::Loading(LOADING_MESSAGE.to_string())
        } else if self.list.is_empty() {
            ListBody::Empty(EmptyState {
                icon: EMPTY_ICON.to_string(),
                message: EMPTY_MESSAGE.to_string(),
            })
        } else {
            ListBody::Cards(
                self.list
                    .entries()
                    .map(|(brew, item)| self.compute_card(brew, item.style()))
                    .collect(),
            )
        };

        let dialog = self.list.confirming().and_then(|item| {
            item.confirmation_message().map(|message| DialogInfo {
                id: item.id(),
                title: confirm::TITLE.to_string(),
                message,
            })
        });

        UIViewModel {
            header: HeaderInfo {
                title: APP_TITLE.to_string(),
                count: self.list.len(),
            },
            error_banner: self.error.clone(),
            search_bar: SearchBarInfo {
                query: self.search.query().to_string(),
                placeholder: PLACEHOLDER.to_string(),
                show_clear: self.search.shows_clear(),
            },
            body,
            dialog,
            form: self.form.as_ref().map(Self::compute_form),
            footer: self.compute_footer(),
        }
    }

    fn compute_card(&self, brew: &Brew, style: SwipeStyle) -> BrewCard {
        BrewCard {
            id: brew.id,
            bean_type: brew.bean_type.clone(),
            brew_type: brew.brew_type.clone(),
            image: brew.display_image().to_string(),
            stats: vec![
                ("Weight In".to_string(), format!("{}g", format_measure(brew.weight_in))),
                ("Water Temp".to_string(), format!("{}°C", format_measure(brew.water_temp))),
                ("Weight Out".to_string(), format!("{}g", format_measure(brew.weight_out))),
                ("Brew Time".to_string(), brew.brew_time_label()),
            ],
            bloom: brew.bloom_label(),
            details: brew.details.clone(),
            offset: style.offset,
            transition: style.transition.describe(),
            highlight_ranges: match_ranges(&brew.bean_type, self.search.query()),
        }
    }

    fn compute_form(form: &AddBrewForm) -> FormInfo {
        let fields = FormField::ALL
            .into_iter()
            .filter(|field| *field != FormField::CustomMethod || form.wants_custom_method())
            .map(|field| FormFieldInfo {
                key: field.key().to_string(),
                label: field.label().to_string(),
                value: form.value(field).to_string(),
                placeholder: field.placeholder().to_string(),
            })
            .collect();

        let method = match &form.method {
            None => METHOD_PROMPT.to_string(),
            Some(BrewMethod::Other(_)) => BrewMethod::OTHER_LABEL.to_string(),
            Some(preset) => preset.label().to_string(),
        };

        let method_options = BrewMethod::PRESETS
            .iter()
            .map(|preset| preset.label().to_string())
            .chain(std::iter::once(BrewMethod::OTHER_LABEL.to_string()))
            .collect();

        FormInfo {
            fields,
            method,
            method_options,
            brew_time: form.picker.display(),
            picker_open: form.picker.is_open(),
            errors: form.errors.clone(),
        }
    }

    /// Command hints for the current overlay.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.overlay() {
            Overlay::DeleteConfirm { .. } => "confirm  cancel  backdrop  dialog".to_string(),
            Overlay::AddForm => {
                let picker = self.form.as_ref().is_some_and(|form| form.picker.is_open());
                if picker {
                    "min <m>  sec <s>  done  click".to_string()
                } else {
                    "set <field> <value>  method <name>  time  submit  cancel".to_string()
                }
            }
            Overlay::None => {
                "search <text>  clear  add  swipe <id> <from> <to>  trash <id>  reload  quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ItemEvent;
    use crate::domain::brew::fixtures::brew;

    fn state_with(brews: Vec<Brew>) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.brews = brews;
        state.refresh_visible();
        state
    }

    #[test]
    fn empty_state_shows_coffee_message() {
        let state = state_with(vec![]);
        let vm = state.compute_viewmodel();
        assert_eq!(
            vm.body,
            ListBody::Empty(EmptyState {
                icon: "☕".to_string(),
                message: "No brews yet. Time to make some coffee!".to_string(),
            })
        );
    }

    #[test]
    fn loading_replaces_list() {
        let mut state = state_with(vec![brew(1, "A")]);
        state.is_loading = true;
        assert_eq!(
            state.compute_viewmodel().body,
            ListBody::Loading(LOADING_MESSAGE.to_string())
        );
    }

    #[test]
    fn card_formats_stats_and_bloom() {
        let mut b = brew(1, "Ethiopian");
        b.bloom_time = 30;
        b.water_temp = 92.5;
        let state = state_with(vec![b]);

        let ListBody::Cards(cards) = state.compute_viewmodel().body else {
            panic!("expected cards");
        };
        let card = &cards[0];
        assert_eq!(
            card.stats,
            vec![
                ("Weight In".to_string(), "18g".to_string()),
                ("Water Temp".to_string(), "92.5°C".to_string()),
                ("Weight Out".to_string(), "36g".to_string()),
                ("Brew Time".to_string(), "02:30".to_string()),
            ]
        );
        assert_eq!(card.bloom.as_deref(), Some("30s"));
        assert_eq!(card.transition, "transform 0.3s ease");
    }

    #[test]
    fn search_highlights_bean_type() {
        let mut state = state_with(vec![brew(1, "Ethiopian"), brew(2, "Kenya")]);
        state.search.handle(crate::components::SearchEvent::Input("thio".to_string()));
        state.refresh_visible();

        let vm = state.compute_viewmodel();
        let ListBody::Cards(cards) = vm.body else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].highlight_ranges, vec![(1, 5)]);
        assert!(vm.search_bar.show_clear);
    }

    #[test]
    fn confirming_item_produces_dialog_overlay() {
        let mut state = state_with(vec![brew(4, "Brazil")]);
        state.list.handle(4, ItemEvent::TrashClicked);

        assert_eq!(state.overlay(), Overlay::DeleteConfirm { id: 4 });
        let dialog = state.compute_viewmodel().dialog.unwrap();
        assert_eq!(dialog.title, "Delete Brew");
        assert!(dialog.message.contains("Brazil"));
    }

    #[test]
    fn optimistic_removal_restores_position() {
        let mut state = state_with(vec![brew(1, "A"), brew(2, "B"), brew(3, "C")]);

        assert!(state.remove_optimistically(2));
        assert_eq!(state.list.len(), 2);

        assert!(state.restore_pending(2));
        let ids: Vec<i64> = state.brews.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!state.restore_pending(2));
    }

    #[test]
    fn form_hides_custom_method_until_other_selected() {
        let mut state = state_with(vec![]);
        state.open_form();
        let form = state.compute_viewmodel().form.unwrap();
        assert!(form.fields.iter().all(|f| f.key != "custom"));
        assert_eq!(form.method, "Select a brew method");
        assert_eq!(form.brew_time, "00:00");
        assert_eq!(form.method_options.last().map(String::as_str), Some("Other"));

        if let Some(form) = state.form.as_mut() {
            form.handle(crate::components::FormEvent::SelectMethod("Other".to_string()));
        }
        let form = state.compute_viewmodel().form.unwrap();
        assert!(form.fields.iter().any(|f| f.key == "custom"));
        assert_eq!(form.method, "Other");
    }
}
