//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with OpenTelemetry integration,
//! setting up the complete observability pipeline from `tracing` macros to file
//! export.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name reported with every span.
const SERVICE_NAME: &str = "brewlog";

/// File name of the trace output inside the data directory.
pub const TRACE_FILE_NAME: &str = "brewlog-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans with an `EnvFilter` built from `config.trace_level`
/// 2. Hands spans to OpenTelemetry
/// 3. Serializes finished spans to OTLP JSON
/// 4. Appends them to a size-rotated file in `data_dir`
///
/// Returns the trace file path, or `None` when tracing could not be set up
/// (the directory cannot be created, or a subscriber is already installed).
/// Tracing is optional: the client runs the same either way.
///
/// # Example
///
/// ```rust
/// use brewlog::observability::init_tracing;
/// use brewlog::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config { trace_level: "debug".to_string(), ..Config::default() };
/// let trace_file = init_tracing(&config, dir.path());
/// assert!(trace_file.is_some());
///
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config, data_dir: &Path) -> Option<PathBuf> {
    if std::fs::create_dir_all(data_dir).is_err() {
        return None;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::file_tracer_provider(trace_file.clone(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .ok()
        .map(|()| trace_file)
}
