//! Background worker for brew API calls.
//!
//! This module implements the worker thread that performs all network I/O so
//! the event loop never blocks on the server. Messages carry the caller's trace
//! context, so spans created on the worker join the trace that issued them.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation, thread spawning, and the event-loop handle

pub mod handler;
pub mod messages;

pub use handler::{BrewWorker, WorkerHandle};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
