//! Error types for the BrewLog client.
//!
//! This module defines the centralized error type [`BrewlogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for BrewLog operations.
///
/// Interaction components (gesture, picker, dialog) never fail; every variant here
/// comes from the API boundary, configuration loading, or user input parsing.
///
/// # Examples
///
/// ```
/// use brewlog::BrewlogError;
///
/// fn validate_config() -> Result<(), BrewlogError> {
///     Err(BrewlogError::Config("api_base_url must not be empty".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum BrewlogError {
    /// HTTP transport failed before a response was received.
    ///
    /// Wraps connection, timeout, and body decoding errors from `reqwest`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("API error: {operation} returned status {status}")]
    Api {
        /// Operation that was attempted (e.g. `"create brew"`).
        operation: String,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The in-process API stand-in could not find the requested brew.
    #[error("Brew not found: {0}")]
    NotFound(i64),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The background worker is gone or could not be started.
    #[error("Worker error: {0}")]
    Worker(String),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A brew time string was not in `MM:SS` form.
    #[error("Invalid brew time {0:?}: expected MM:SS with minutes and seconds below 60")]
    InvalidBrewTime(String),

    /// A console command could not be understood.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// The add-brew form was submitted with invalid fields.
    #[error("Invalid brew: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// A specialized `Result` type for BrewLog operations.
pub type Result<T> = std::result::Result<T, BrewlogError>;

impl From<toml::de::Error> for BrewlogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_joins_field_messages() {
        let err = BrewlogError::Validation(vec![
            "Beans are required".to_string(),
            "Weight in must be a number".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid brew: Beans are required; Weight in must be a number"
        );
    }

    #[test]
    fn api_error_names_operation_and_status() {
        let err = BrewlogError::Api {
            operation: "delete brew".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "API error: delete brew returned status 404");
    }
}
