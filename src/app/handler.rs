//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the console or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and component methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **List**: `Load`, `Item`, `UpdateBrew`
//! - **Input**: `Search`, `PointerDown`
//! - **Form**: `OpenForm`, `Form`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use brewlog::app::{handle_event, Action, AppState, Event};
//! use brewlog::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Load)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::api::Operation;
use crate::app::modes::Overlay;
use crate::app::{Action, AppState};
use crate::components::{
    FormEvent, FormOutcome, HitTarget, ItemEvent, ItemOutcome, PickerEvent, Region, SearchEvent,
};
use crate::domain::error::Result;
use crate::domain::NewBrew;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Fetches all brews from the server.
    Load,

    /// Edits or clears the search query.
    Search(SearchEvent),

    /// Opens the add-brew form.
    OpenForm,

    /// Input to the open add-brew form.
    Form(FormEvent),

    /// Input to one list entry.
    Item {
        /// Brew the entry shows.
        id: i64,
        event: ItemEvent,
    },

    /// A pointer press somewhere on screen.
    ///
    /// Routed through the pointer bus to every subscribed component the
    /// press landed outside of.
    PointerDown(HitTarget),

    /// Replaces every field of an existing brew.
    UpdateBrew {
        id: i64,
        brew: NewBrew,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Exits the application.
    Quit,
}

/// Message shown in the error banner after a failed operation.
#[must_use]
pub const fn failure_message(operation: Operation) -> &'static str {
    match operation {
        Operation::Load => "Failed to load brews. Please try again later.",
        Operation::Create => "Failed to add brew. Please try again.",
        Operation::Update => "Failed to update brew. Please try again.",
        Operation::Delete => "Failed to delete brew. Please try again.",
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions and
/// side effects.
///
/// # Returns
///
/// `(needs_render, actions)`. The action list may be empty if the event
/// requires no side effects.
///
/// # Errors
///
/// Reserved for state mutations that can fail; every current event path
/// succeeds.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Load => {
            tracing::debug!("loading brews");
            state.is_loading = true;
            Ok((true, vec![Action::PostToWorker(WorkerMessage::load_brews())]))
        }
        Event::Search(search_event) => {
            if !state.search.handle(search_event.clone()) {
                return Ok((false, vec![]));
            }
            tracing::trace!(query = %state.search.query(), "search query updated");
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::OpenForm => Ok((state.open_form(), vec![])),
        Event::Form(form_event) => handle_form_event(state, form_event),
        Event::Item { id, event } => handle_item_event(state, *id, *event),
        Event::PointerDown(target) => {
            let missed = state.pointer_bus.outside_of(*target);
            let mut render = false;
            for region in missed {
                render |= match region {
                    Region::TimePicker => state.form.as_mut().is_some_and(|form| {
                        form.handle(FormEvent::Picker(PickerEvent::OutsideClick))
                            == FormOutcome::Updated(true)
                    }),
                    Region::BrewItem(id) => {
                        state.list.handle(id, ItemEvent::OutsideClick)
                            == Some(ItemOutcome::Updated(true))
                    }
                };
            }
            Ok((render, vec![]))
        }
        Event::UpdateBrew { id, brew } => {
            tracing::debug!(brew_id = id, "updating brew");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::update_brew(*id, brew.clone()))]))
        }
        Event::WorkerResponse(response) => Ok((handle_worker_response(state, response), vec![])),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

fn handle_form_event(state: &mut AppState, event: &FormEvent) -> Result<(bool, Vec<Action>)> {
    let Some(form) = state.form.as_mut() else {
        tracing::debug!("form event without open form");
        return Ok((false, vec![]));
    };

    match form.handle(event.clone()) {
        FormOutcome::Updated(changed) => Ok((changed, vec![])),
        FormOutcome::Rejected => Ok((true, vec![])),
        FormOutcome::Closed => {
            state.form = None;
            Ok((true, vec![]))
        }
        FormOutcome::Submitted(brew) => {
            tracing::debug!(bean_type = %brew.bean_type, "submitting brew");
            state.is_loading = true;
            Ok((true, vec![Action::PostToWorker(WorkerMessage::create_brew(brew))]))
        }
    }
}

fn handle_item_event(state: &mut AppState, id: i64, event: ItemEvent) -> Result<(bool, Vec<Action>)> {
    match state.overlay() {
        Overlay::DeleteConfirm { id: open } if open != id => return Ok((false, vec![])),
        Overlay::AddForm => return Ok((false, vec![])),
        _ => {}
    }

    match state.list.handle(id, event) {
        None => {
            tracing::debug!(brew_id = id, "event for unknown brew");
            Ok((false, vec![]))
        }
        Some(ItemOutcome::Updated(changed)) => Ok((changed, vec![])),
        Some(ItemOutcome::Delete(id)) => {
            if !state.remove_optimistically(id) {
                return Ok((true, vec![]));
            }
            tracing::debug!(brew_id = id, "brew removed pending server confirmation");
            Ok((true, vec![Action::PostToWorker(WorkerMessage::delete_brew(id))]))
        }
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> bool {
    match response {
        WorkerResponse::BrewsLoaded { brews } => {
            tracing::debug!(count = brews.len(), "brews loaded");
            state.brews = brews
                .iter()
                .filter(|brew| !state.pending_deletes.contains_key(&brew.id))
                .cloned()
                .collect();
            state.error = None;
            state.is_loading = false;
        }
        WorkerResponse::BrewCreated { brew } => {
            tracing::debug!(brew_id = brew.id, "brew created");
            state.brews.insert(0, brew.clone());
            state.form = None;
            state.error = None;
            state.is_loading = false;
        }
        WorkerResponse::BrewUpdated { brew } => {
            if let Some(slot) = state.brews.iter_mut().find(|existing| existing.id == brew.id) {
                *slot = brew.clone();
            }
            state.error = None;
        }
        WorkerResponse::BrewDeleted { id } => {
            state.pending_deletes.remove(id);
            state.error = None;
            return true;
        }
        WorkerResponse::Failed { operation, id, message } => {
            tracing::error!(operation = operation.describe(), brew_id = ?id, %message, "operation failed");
            state.error = Some(failure_message(*operation).to_string());
            state.is_loading = false;
            if let (Operation::Delete, Some(id)) = (operation, id) {
                state.restore_pending(*id);
            }
        }
    }
    state.refresh_visible();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::DialogClick;
    use crate::domain::brew::fixtures::{brew, new_brew};
    use crate::ui::theme::Theme;
    use rstest::rstest;

    fn loaded(brews: Vec<crate::domain::Brew>) -> AppState {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::BrewsLoaded { brews }))
            .unwrap();
        state
    }

    fn item(id: i64, event: ItemEvent) -> Event {
        Event::Item { id, event }
    }

    fn swipe(state: &mut AppState, id: i64, from: f64, to: f64) {
        handle_event(state, &item(id, ItemEvent::SwipeStart(from))).unwrap();
        handle_event(state, &item(id, ItemEvent::SwipeMove(to))).unwrap();
        handle_event(state, &item(id, ItemEvent::SwipeEnd)).unwrap();
    }

    #[test]
    fn load_sets_loading_and_posts_message() {
        let mut state = AppState::new(Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::Load).unwrap();

        assert!(render);
        assert!(state.is_loading);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadBrews { .. })]
        ));
    }

    #[test]
    fn loaded_brews_clear_error_and_loading() {
        let mut state = AppState::new(Theme::default());
        state.is_loading = true;
        state.error = Some("old".to_string());

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::BrewsLoaded { brews: vec![brew(1, "A")] }),
        )
        .unwrap();

        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.list.len(), 1);
    }

    #[test]
    fn confirmed_delete_removes_optimistically() {
        let mut state = loaded(vec![brew(1, "A"), brew(2, "B")]);
        swipe(&mut state, 2, 200.0, 100.0);
        assert_eq!(state.overlay(), Overlay::DeleteConfirm { id: 2 });

        let (_, actions) =
            handle_event(&mut state, &item(2, ItemEvent::Dialog(DialogClick::Confirm))).unwrap();

        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::DeleteBrew { id: 2, .. })]
        ));
        assert_eq!(state.list.len(), 1);
        assert!(state.pending_deletes.contains_key(&2));
        assert_eq!(state.overlay(), Overlay::None);
    }

    #[test]
    fn failed_delete_restores_brew_in_place() {
        let mut state = loaded(vec![brew(1, "A"), brew(2, "B"), brew(3, "C")]);
        handle_event(&mut state, &item(2, ItemEvent::TrashClicked)).unwrap();
        handle_event(&mut state, &item(2, ItemEvent::Dialog(DialogClick::Confirm))).unwrap();

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Failed {
                operation: Operation::Delete,
                id: Some(2),
                message: "delete brew: boom".to_string(),
            }),
        )
        .unwrap();

        let ids: Vec<i64> = state.list.brews().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.error.as_deref(), Some("Failed to delete brew. Please try again."));
    }

    #[test]
    fn confirmed_delete_forgets_pending_entry() {
        let mut state = loaded(vec![brew(1, "A")]);
        handle_event(&mut state, &item(1, ItemEvent::TrashClicked)).unwrap();
        handle_event(&mut state, &item(1, ItemEvent::Dialog(DialogClick::Confirm))).unwrap();
        handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::BrewDeleted { id: 1 }))
            .unwrap();

        assert!(state.pending_deletes.is_empty());
        assert!(state.list.is_empty());
    }

    #[test]
    fn events_for_other_entries_are_ignored_while_dialog_open() {
        let mut state = loaded(vec![brew(1, "A"), brew(2, "B")]);
        handle_event(&mut state, &item(1, ItemEvent::TrashClicked)).unwrap();

        let (render, _) = handle_event(&mut state, &item(2, ItemEvent::TrashClicked)).unwrap();

        assert!(!render);
        assert!(!state.list.item(2).unwrap().is_confirming());
    }

    #[test]
    fn submit_posts_create_and_created_closes_form() {
        let mut state = loaded(vec![brew(1, "Old")]);
        handle_event(&mut state, &Event::OpenForm).unwrap();
        {
            let form = state.form.as_mut().unwrap();
            form.bean_type = "Kenya".to_string();
            form.handle(FormEvent::SelectMethod("V60".to_string()));
            form.water_temp = "93".to_string();
            form.weight_in = "18".to_string();
            form.weight_out = "36".to_string();
        }

        let (_, actions) = handle_event(&mut state, &Event::Form(FormEvent::Submit)).unwrap();
        let [Action::PostToWorker(WorkerMessage::CreateBrew { brew: sent, .. })] = actions.as_slice()
        else {
            panic!("expected create message, got {actions:?}");
        };
        assert_eq!(sent.brew_time, "00:00");
        assert!(state.is_loading);

        let created = crate::domain::Brew::from_new(9, sent.clone());
        handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::BrewCreated { brew: created }))
            .unwrap();

        assert!(state.form.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.brews[0].id, 9);
    }

    #[test]
    fn invalid_submit_keeps_form_open_with_errors() {
        let mut state = loaded(vec![]);
        handle_event(&mut state, &Event::OpenForm).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Form(FormEvent::Submit)).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        let form = state.form.as_ref().unwrap();
        assert!(form.errors.contains(&"Beans are required".to_string()));
    }

    #[test]
    fn backdrop_click_closes_form() {
        let mut state = loaded(vec![]);
        handle_event(&mut state, &Event::OpenForm).unwrap();
        handle_event(&mut state, &Event::Form(FormEvent::BackdropClick)).unwrap();
        assert!(state.form.is_none());
    }

    #[test]
    fn pointer_down_elsewhere_closes_picker() {
        let mut state = loaded(vec![]);
        handle_event(&mut state, &Event::OpenForm).unwrap();
        handle_event(&mut state, &Event::Form(FormEvent::Picker(PickerEvent::FieldClicked))).unwrap();
        assert!(state.form.as_ref().unwrap().picker.is_open());

        handle_event(&mut state, &Event::PointerDown(HitTarget::Inside(Region::TimePicker))).unwrap();
        assert!(state.form.as_ref().unwrap().picker.is_open());

        let (render, _) = handle_event(&mut state, &Event::PointerDown(HitTarget::Elsewhere)).unwrap();
        assert!(render);
        assert!(!state.form.as_ref().unwrap().picker.is_open());
    }

    #[test]
    fn pointer_down_elsewhere_interrupts_drag() {
        let mut state = loaded(vec![brew(3, "A")]);
        handle_event(&mut state, &item(3, ItemEvent::SwipeStart(200.0))).unwrap();
        handle_event(&mut state, &item(3, ItemEvent::SwipeMove(150.0))).unwrap();

        handle_event(&mut state, &Event::PointerDown(HitTarget::Elsewhere)).unwrap();

        let item = state.list.item(3).unwrap();
        assert!(!item.is_dragging());
        assert!(item.style().offset.abs() < f64::EPSILON);
        assert_eq!(state.pointer_bus.subscription_count(), 0);
    }

    #[test]
    fn update_replaces_brew_in_place() {
        let mut state = loaded(vec![brew(1, "A"), brew(2, "B")]);
        let (_, actions) = handle_event(
            &mut state,
            &Event::UpdateBrew { id: 2, brew: new_brew("Renamed") },
        )
        .unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::UpdateBrew { id: 2, .. })]
        ));

        let updated = crate::domain::Brew::from_new(2, new_brew("Renamed"));
        handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::BrewUpdated { brew: updated }))
            .unwrap();
        assert_eq!(state.brews[1].bean_type, "Renamed");
    }

    #[test]
    fn search_filters_visible_list() {
        let mut state = loaded(vec![brew(1, "Ethiopian"), brew(2, "Kenya")]);
        let (render, _) =
            handle_event(&mut state, &Event::Search(SearchEvent::Input("KEN".to_string()))).unwrap();
        assert!(render);
        assert_eq!(state.list.len(), 1);

        handle_event(&mut state, &Event::Search(SearchEvent::Clear)).unwrap();
        assert_eq!(state.list.len(), 2);
    }

    #[rstest]
    #[case(Operation::Load, "Failed to load brews. Please try again later.")]
    #[case(Operation::Create, "Failed to add brew. Please try again.")]
    #[case(Operation::Update, "Failed to update brew. Please try again.")]
    #[case(Operation::Delete, "Failed to delete brew. Please try again.")]
    fn failures_show_generic_message(#[case] operation: Operation, #[case] expected: &str) {
        let mut state = AppState::new(Theme::default());
        state.is_loading = true;
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Failed {
                operation,
                id: None,
                message: "connection refused".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(state.error.as_deref(), Some(expected));
        assert!(!state.is_loading);
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
