//! Brew API abstraction.
//!
//! This module defines the [`BrewApi`] trait that abstracts over the server the
//! client talks to. The worker holds a boxed implementation, so the HTTP client
//! and the in-process stand-in are interchangeable without touching the
//! application layer.
//!
//! # Design Philosophy
//!
//! The trait mirrors the four operations the brews resource exposes and nothing
//! more. Each method maps directly to one worker message.

use crate::domain::{Brew, NewBrew, Result};
use serde::{Deserialize, Serialize};

/// Operations on the remote brews collection.
///
/// # Implementations
///
/// - [`HttpBrewApi`](crate::api::HttpBrewApi): JSON over HTTP (default)
/// - [`InMemoryBrewApi`](crate::api::InMemoryBrewApi): in-process stand-in
///
/// # Examples
///
/// ```no_run
/// use brewlog::api::{BrewApi, HttpBrewApi};
/// use std::time::Duration;
///
/// let mut api = HttpBrewApi::new("http://localhost:8000/api/v1", Duration::from_secs(10))?;
/// let brews = api.list()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait BrewApi: Send {
    /// Fetches every brew.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    fn list(&mut self) -> Result<Vec<Brew>>;

    /// Persists a new brew and returns it with its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    fn create(&mut self, brew: &NewBrew) -> Result<Brew>;

    /// Replaces every field of the brew with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the brew does not exist or the request fails.
    fn update(&mut self, id: i64, brew: &NewBrew) -> Result<Brew>;

    /// Deletes the brew with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the brew does not exist or the request fails.
    fn delete(&mut self, id: i64) -> Result<()>;
}

/// The four operations of the brews resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Short lowercase description used in logs and API errors.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Load => "load brews",
            Self::Create => "create brew",
            Self::Update => "update brew",
            Self::Delete => "delete brew",
        }
    }
}
