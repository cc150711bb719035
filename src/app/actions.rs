//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or worker
//! responses. Actions bridge pure state transformations and effectful
//! operations like API calls or shutting down.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The runtime executes these
//! actions in sequence.
//!
//! # Example
//!
//! ```rust
//! use brewlog::app::Action;
//! use brewlog::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_brews())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
///
/// Actions are produced by the event handler and executed by the runtime.
/// They represent the boundary between pure state transformations and
/// network or process-level effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Stops the event loop.
    ///
    /// Sent when the user explicitly asks to exit.
    Quit,

    /// Posts a message to the background worker thread.
    ///
    /// Every brew API call goes through the worker so the event loop never
    /// blocks on the network.
    PostToWorker(WorkerMessage),
}
