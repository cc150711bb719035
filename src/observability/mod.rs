//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans from `tracing` are bridged into OpenTelemetry and written as OTLP JSON
//! to a local file for offline analysis and debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileExporter → RotatingFile
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `$XDG_DATA_HOME/brewlog/brewlog-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3 numbered backups
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Propagation**: Worker messages and HTTP requests carry the active trace
//!
//! # Configuration
//!
//! Trace level comes from the `trace_level` config option (or the
//! `BREWLOG_TRACE_LEVEL` environment variable), default `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: OpenTelemetry tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
