//! Worker message types for the API request boundary.
//!
//! This module defines the request and response protocol between the event
//! loop and the background worker that performs brew API calls. It also
//! implements tracing context propagation across the thread boundary and into
//! outgoing HTTP requests.

use crate::api::Operation;
use crate::domain::{Brew, NewBrew};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use brewlog::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("traceparent: {}", ctx.traceparent());
    /// }
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::trace!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::trace!("span context is not valid");
            None
        }
    }

    /// W3C `traceparent` header value for a sampled span.
    #[must_use]
    pub fn traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.parent_span_id)
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_brews(LoadBrews {}),
    create_brew(CreateBrew { brew: NewBrew }),
    update_brew(UpdateBrew { id: i64, brew: NewBrew }),
    delete_brew(DeleteBrew { id: i64 }),
}

/// Messages sent from the event loop to the worker thread.
///
/// Each variant corresponds to one brew API call. All variants include an
/// optional trace context for distributed tracing support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch every brew.
    LoadBrews {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist a brew submitted from the add form.
    CreateBrew {
        brew: NewBrew,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Replace every field of an existing brew.
    UpdateBrew {
        id: i64,
        brew: NewBrew,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Delete a brew by id.
    DeleteBrew {
        id: i64,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context carried by any variant.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadBrews { trace_context }
            | Self::CreateBrew { trace_context, .. }
            | Self::UpdateBrew { trace_context, .. }
            | Self::DeleteBrew { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// The API operation this message requests.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::LoadBrews { .. } => Operation::Load,
            Self::CreateBrew { .. } => Operation::Create,
            Self::UpdateBrew { .. } => Operation::Update,
            Self::DeleteBrew { .. } => Operation::Delete,
        }
    }
}

/// Responses sent from the worker thread back to the event loop.
///
/// Each variant corresponds to the completion of a worker operation, either
/// successfully with result data or with an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Brews were fetched from the server.
    BrewsLoaded {
        /// Brews in server order.
        brews: Vec<Brew>,
    },

    /// A new brew was persisted.
    BrewCreated {
        /// The brew with its server-assigned id.
        brew: Brew,
    },

    /// An existing brew was replaced.
    BrewUpdated {
        brew: Brew,
    },

    /// A brew was deleted on the server.
    BrewDeleted {
        id: i64,
    },

    /// The operation failed.
    Failed {
        /// Operation that was attempted.
        operation: Operation,

        /// Brew the operation targeted, for update and delete.
        id: Option<i64>,

        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brew::fixtures::new_brew;

    #[test]
    fn traceparent_is_w3c_sampled() {
        let context = TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
            parent_span_id: "00f067aa0ba902b7".to_string(),
        };
        assert_eq!(
            context.traceparent(),
            "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"
        );
    }

    #[test]
    fn builders_attach_operation() {
        assert_eq!(WorkerMessage::load_brews().operation(), Operation::Load);
        assert_eq!(WorkerMessage::create_brew(new_brew("A")).operation(), Operation::Create);
        assert_eq!(WorkerMessage::update_brew(1, new_brew("A")).operation(), Operation::Update);
        assert_eq!(WorkerMessage::delete_brew(1).operation(), Operation::Delete);
    }

    #[test]
    fn no_active_span_means_no_context() {
        assert_eq!(WorkerMessage::delete_brew(3).trace_context(), None);
    }

    #[test]
    fn message_without_context_omits_field() {
        let json = serde_json::to_string(&WorkerMessage::DeleteBrew {
            id: 3,
            trace_context: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"DeleteBrew":{"id":3}}"#);
    }
}
