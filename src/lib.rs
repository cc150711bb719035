//! BrewLog: a terminal client for logging coffee brews.
//!
//! BrewLog keeps a journal of brews on a JSON REST backend and provides:
//! - A searchable list of brews, newest first
//! - Swipe-to-delete with a confirmation dialog and optimistic removal
//! - An add-brew form with validation and a minutes/seconds brew-time picker
//! - Background API calls on a worker thread with trace propagation

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Console shell (main.rs, console, runtime)          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Components    │   │ Worker Layer  │
//! │ (ui/)         │   │ (components/) │   │ (worker/)     │
//! │ - Rendering   │   │ - Swipe       │   │ - API calls   │
//! │ - Theming     │   │ - Form/picker │   │ - Trace ctx   │
//! │               │   │ - Search      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  API (api/): BrewApi trait, HTTP + in-memory        │
//! │  Domain (domain/): Brew, BrewTime, errors           │
//! │  Infrastructure (infrastructure/): XDG paths        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read from `$XDG_CONFIG_HOME/brewlog/config.toml`; every key is optional:
//!
//! ```toml
//! api_base_url = "http://localhost:8000/api/v1"
//! request_timeout_secs = 10
//! theme = "catppuccin-mocha"
//! theme_file = "~/.config/brewlog/espresso.toml"
//! trace_level = "info"
//! ```
//!
//! `BREWLOG_API_URL` and `BREWLOG_TRACE_LEVEL` override the file.
//!
//! # Example
//!
//! ```rust
//! use brewlog::api::InMemoryBrewApi;
//! use brewlog::runtime::Runtime;
//! use brewlog::{initialize, Config, Event};
//!
//! let config = Config::default();
//! let state = initialize(&config);
//! let mut runtime = Runtime::new(state, Box::new(InMemoryBrewApi::new()), config.response_timeout())?;
//!
//! runtime.dispatch(&Event::Load)?;
//! runtime.settle()?;
//! assert!(runtime.state().list.is_empty());
//! # Ok::<(), brewlog::BrewlogError>(())
//! ```

pub mod api;
pub mod app;
pub mod components;
pub mod console;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Brew, BrewlogError, NewBrew, Result};
pub use ui::Theme;

use api::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding [`Config::api_base_url`].
pub const ENV_API_URL: &str = "BREWLOG_API_URL";

/// Environment variable overriding [`Config::trace_level`].
pub const ENV_TRACE_LEVEL: &str = "BREWLOG_TRACE_LEVEL";

/// Extra time the event loop waits for the worker beyond the HTTP timeout.
const RESPONSE_GRACE: Duration = Duration::from_secs(5);

/// Client configuration.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the brew API, without the `/brews/` suffix.
    pub api_base_url: String,

    /// Timeout for each HTTP request, in seconds.
    pub request_timeout_secs: u64,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme: String,

    /// Path to a custom TOML theme file; `~` is expanded.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Filter directive for spans and events.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            theme: ui::theme::DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses and validates configuration TOML.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlogError::Config`] for malformed TOML, unknown keys, or
    /// invalid values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brewlog::Config;
    ///
    /// let config = Config::from_toml("request_timeout_secs = 3")?;
    /// assert_eq!(config.request_timeout_secs, 3);
    /// assert_eq!(config.theme, "catppuccin-mocha");
    /// # Ok::<(), brewlog::BrewlogError>(())
    /// ```
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from `path`; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Applies overrides from a variable lookup.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlogError::Config`] if the result is invalid.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(url) = get(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(level) = get(ENV_TRACE_LEVEL) {
            self.trace_level = level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlogError::Config`] if the result is invalid.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(BrewlogError::Config("api_base_url must not be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(BrewlogError::Config(format!(
                "api_base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(BrewlogError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Timeout applied to each HTTP request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// How long the event loop waits for one worker response.
    #[must_use]
    pub fn response_timeout(&self) -> Duration {
        self.request_timeout() + RESPONSE_GRACE
    }

    /// Theme file with `~` expanded.
    #[must_use]
    pub fn theme_path(&self) -> Option<PathBuf> {
        self.theme_file.as_deref().map(infrastructure::expand_tilde)
    }
}

/// Creates the initial application state for `config`.
///
/// An unusable theme falls back to the default rather than failing startup.
///
/// # Example
///
/// ```rust
/// use brewlog::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.theme.name, "catppuccin-mocha");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing brewlog");

    let theme_path = config.theme_path();
    let theme = Theme::load(&config.theme, theme_path.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(theme = %config.theme, error = %e, "failed to load theme, using default");
        Theme::default()
    });

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn full_file_parses() {
        let config = Config::from_toml(
            r#"
            api_base_url = "https://brews.example.com/api/v1"
            request_timeout_secs = 4
            theme = "catppuccin-latte"
            theme_file = "~/espresso.toml"
            trace_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://brews.example.com/api/v1");
        assert_eq!(config.request_timeout(), Duration::from_secs(4));
        assert_eq!(config.response_timeout(), Duration::from_secs(9));
        assert_eq!(config.theme_file.as_deref(), Some("~/espresso.toml"));
        assert_eq!(config.trace_level, "debug");
    }

    #[rstest]
    #[case("request_timeout_secs = 0")]
    #[case("api_base_url = \"\"")]
    #[case("api_base_url = \"localhost:8000\"")]
    #[case("colour = \"blue\"")]
    #[case("request_timeout_secs = \"ten\"")]
    fn invalid_files_are_rejected(#[case] contents: &str) {
        assert!(matches!(Config::from_toml(contents), Err(BrewlogError::Config(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_on_disk_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"catppuccin-latte\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "catppuccin-latte");
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
    }

    #[test]
    fn environment_overrides_file() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_URL, "http://10.0.0.2:8000/api/v1"),
            (ENV_TRACE_LEVEL, ""),
        ]);
        let config = Config::default()
            .with_overrides(|name| env.get(name).map(|value| (*value).to_string()))
            .unwrap();

        assert_eq!(config.api_base_url, "http://10.0.0.2:8000/api/v1");
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config { theme: "espresso".to_string(), ..Config::default() };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
