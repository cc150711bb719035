//! Worker implementation for brew API calls.
//!
//! [`BrewWorker`] turns [`WorkerMessage`]s into [`BrewApi`] calls and answers
//! with [`WorkerResponse`]s. [`BrewWorker::spawn`] moves it onto a dedicated
//! thread so that network round trips never block the event loop; the
//! returned [`WorkerHandle`] is the only way to reach it.

use crate::api::BrewApi;
use crate::domain::{BrewlogError, Result};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Worker state: the API client every message is executed against.
pub struct BrewWorker {
    api: Box<dyn BrewApi>,
}

impl std::fmt::Debug for BrewWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrewWorker").finish_non_exhaustive()
    }
}

impl BrewWorker {
    #[must_use]
    pub fn new(api: Box<dyn BrewApi>) -> Self {
        Self { api }
    }

    /// Helper for handling API results with consistent logging.
    ///
    /// Failures are logged here with the full error; the response only keeps
    /// the rendered message.
    fn handle_api_result<T, F>(message: &WorkerMessage, id: Option<i64>, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        let operation = message.operation();
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation.describe(), "API operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::error!(operation = operation.describe(), brew_id = ?id, error = %e, "API operation failed");
                WorkerResponse::Failed {
                    operation,
                    id,
                    message: format!("{}: {e}", operation.describe()),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// This function reconstructs the OpenTelemetry context from the serialized
    /// trace information in the message, allowing spans created in the worker
    /// thread to be linked to their parent spans on the event loop.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the matching response.
    ///
    /// Attaches the message's trace context and creates a tracing span for the
    /// operation before calling the API.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", operation = message.operation().describe());
        let _guard = span.entered();

        match &message {
            WorkerMessage::LoadBrews { .. } => {
                Self::handle_api_result(&message, None, self.api.list(), |brews| {
                    tracing::debug!(brew_count = brews.len(), "brews loaded");
                    WorkerResponse::BrewsLoaded { brews }
                })
            }
            WorkerMessage::CreateBrew { brew, .. } => {
                Self::handle_api_result(&message, None, self.api.create(brew), |brew| {
                    tracing::debug!(brew_id = brew.id, "brew created");
                    WorkerResponse::BrewCreated { brew }
                })
            }
            WorkerMessage::UpdateBrew { id, brew, .. } => {
                Self::handle_api_result(&message, Some(*id), self.api.update(*id, brew), |brew| {
                    WorkerResponse::BrewUpdated { brew }
                })
            }
            WorkerMessage::DeleteBrew { id, .. } => {
                let id = *id;
                Self::handle_api_result(&message, Some(id), self.api.delete(id), |()| {
                    WorkerResponse::BrewDeleted { id }
                })
            }
        }
    }

    /// Moves the worker onto its own thread.
    ///
    /// The thread exits once the returned handle is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(mut self) -> Result<WorkerHandle> {
        let (message_tx, message_rx) = mpsc::channel::<WorkerMessage>();
        let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>();

        let thread = std::thread::Builder::new()
            .name("brewlog-worker".to_string())
            .spawn(move || {
                for message in message_rx {
                    let response = self.handle_message(message);
                    if response_tx.send(response).is_err() {
                        break;
                    }
                }
                tracing::debug!("worker thread exiting");
            })?;

        Ok(WorkerHandle {
            sender: Some(message_tx),
            receiver: response_rx,
            thread: Some(thread),
        })
    }
}

/// Event-loop side of a spawned [`BrewWorker`].
#[derive(Debug)]
pub struct WorkerHandle {
    sender: Option<Sender<WorkerMessage>>,
    receiver: Receiver<WorkerResponse>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Queues a message for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlogError::Worker`] if the worker thread has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.sender
            .as_ref()
            .ok_or_else(|| BrewlogError::Worker("worker is shut down".to_string()))?
            .send(message)
            .map_err(|_| BrewlogError::Worker("worker thread stopped".to_string()))
    }

    /// Waits up to `timeout` for the next response.
    ///
    /// Returns `Ok(None)` on timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlogError::Worker`] if the worker thread has stopped.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerResponse>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(response) => Ok(Some(response)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(BrewlogError::Worker("worker thread stopped".to_string()))
            }
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.sender = None;
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{InMemoryBrewApi, Operation};
    use crate::domain::brew::fixtures::{brew, new_brew};

    fn worker(api: &InMemoryBrewApi) -> BrewWorker {
        BrewWorker::new(Box::new(api.clone()))
    }

    #[test]
    fn load_returns_stored_brews() {
        let api = InMemoryBrewApi::with_brews(&[brew(1, "A"), brew(2, "B")]);
        let response = worker(&api).handle_message(WorkerMessage::load_brews());
        assert_eq!(
            response,
            WorkerResponse::BrewsLoaded {
                brews: vec![brew(1, "A"), brew(2, "B")]
            }
        );
    }

    #[test]
    fn create_returns_assigned_id() {
        let api = InMemoryBrewApi::new();
        let response = worker(&api).handle_message(WorkerMessage::create_brew(new_brew("Kenya")));
        assert!(matches!(response, WorkerResponse::BrewCreated { brew } if brew.id == 1 && brew.bean_type == "Kenya"));
    }

    #[test]
    fn failure_names_operation_and_target() {
        let api = InMemoryBrewApi::with_brews(&[brew(4, "A")]);
        api.fail(Operation::Delete);

        let response = worker(&api).handle_message(WorkerMessage::delete_brew(4));
        match response {
            WorkerResponse::Failed { operation, id, message } => {
                assert_eq!(operation, Operation::Delete);
                assert_eq!(id, Some(4));
                assert!(message.starts_with("delete brew: "));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn spawned_worker_answers_in_order() {
        let api = InMemoryBrewApi::with_brews(&[brew(1, "A")]);
        let handle = worker(&api).spawn().unwrap();

        handle.post(WorkerMessage::delete_brew(1)).unwrap();
        handle.post(WorkerMessage::load_brews()).unwrap();

        let timeout = Duration::from_secs(5);
        assert_eq!(
            handle.recv_timeout(timeout).unwrap(),
            Some(WorkerResponse::BrewDeleted { id: 1 })
        );
        assert_eq!(
            handle.recv_timeout(timeout).unwrap(),
            Some(WorkerResponse::BrewsLoaded { brews: vec![] })
        );
    }
}
