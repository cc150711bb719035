//! Brew journal state and the events that change it.
//!
//! Sits between the console runtime and the component/worker layers. Every
//! user gesture and every worker reply arrives as an [`Event`]; the handler
//! mutates [`AppState`] and hands back the API calls to make.
//!
//! ```text
//! console line → Event → handle_event → AppState ─→ Action::PostToWorker
//!                              ↑                              │
//!                              └── Event::WorkerResponse ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: What the runtime must do after an event
//! - [`handler`]: Event routing, optimistic deletes, failure messages
//! - [`modes`]: Overlay state covering the brew list
//! - [`state`]: Brews, components, pending deletes, and view model computation
//!
//! # Example
//!
//! ```rust
//! use brewlog::app::{handle_event, AppState, Event};
//! use brewlog::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::OpenForm)?;
//! assert!(actions.is_empty());
//! assert!(state.form.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{failure_message, handle_event, Event};
pub use modes::Overlay;
pub use state::AppState;
