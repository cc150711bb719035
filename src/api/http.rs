//! Reqwest-backed brew API client.
//!
//! This adapter owns transport details only: URL building, request timeout,
//! trace header propagation, status mapping, and JSON decoding into domain
//! brews.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::backend::{BrewApi, Operation};
use crate::api::models::{BrewPayload, BrewRecord};
use crate::domain::{Brew, BrewlogError, NewBrew, Result};
use crate::worker::TraceContext;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

const USER_AGENT: &str = concat!("brewlog/", env!("CARGO_PKG_VERSION"));

/// Brew API client performing blocking JSON requests against one base URL.
#[derive(Debug, Clone)]
pub struct HttpBrewApi {
    client: Client,
    base_url: String,
}

impl HttpBrewApi {
    /// Builds a client with an explicit request timeout.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/brews/", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/brews/{id}", self.base_url)
    }

    fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response> {
        let request = match TraceContext::from_current() {
            Some(context) => request.header("traceparent", context.traceparent()),
            None => request,
        };

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(operation = operation.describe(), status = status.as_u16(), "brew API returned error status");
            return Err(BrewlogError::Api {
                operation: operation.describe().to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl BrewApi for HttpBrewApi {
    fn list(&mut self) -> Result<Vec<Brew>> {
        let _span = tracing::debug_span!("http_list_brews").entered();
        let response = self.send(Operation::Load, self.client.get(self.collection_url()))?;
        let records: Vec<BrewRecord> = Self::decode(response)?;
        tracing::debug!(count = records.len(), "brews fetched");
        Ok(records.into_iter().map(Brew::from).collect())
    }

    fn create(&mut self, brew: &NewBrew) -> Result<Brew> {
        let _span = tracing::debug_span!("http_create_brew", bean_type = %brew.bean_type).entered();
        let request = self
            .client
            .post(self.collection_url())
            .json(&BrewPayload::from(brew));
        let record: BrewRecord = Self::decode(self.send(Operation::Create, request)?)?;
        Ok(record.into())
    }

    fn update(&mut self, id: i64, brew: &NewBrew) -> Result<Brew> {
        let _span = tracing::debug_span!("http_update_brew", id).entered();
        let request = self.client.put(self.item_url(id)).json(&BrewPayload::from(brew));
        let record: BrewRecord = Self::decode(self.send(Operation::Update, request)?)?;
        Ok(record.into())
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let _span = tracing::debug_span!("http_delete_brew", id).entered();
        self.send(Operation::Delete, self.client.delete(self.item_url(id)))?;
        Ok(())
    }
}
