//! Wire records for the brews REST resource.
//!
//! These types mirror the server's snake_case JSON and are kept separate from
//! the domain [`Brew`] so that server-only fields (timestamps) and wire quirks
//! (a `null` bloom time) never leak into the rest of the client.

use crate::domain::{Brew, NewBrew};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A brew as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewRecord {
    pub id: i64,
    pub bean_type: String,
    pub image_url: Option<String>,
    pub brew_type: String,
    pub water_temp: f64,
    pub weight_in: f64,
    pub weight_out: f64,
    pub brew_time: String,
    /// Seconds; the server may send `null` for brews without a bloom.
    #[serde(default)]
    pub bloom_time: Option<u32>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BrewRecord {
    /// Builds a record for `brew` as the server would store it.
    #[must_use]
    pub fn from_brew(brew: &Brew, created_at: DateTime<Utc>) -> Self {
        Self {
            id: brew.id,
            bean_type: brew.bean_type.clone(),
            image_url: brew.image_url.clone(),
            brew_type: brew.brew_type.clone(),
            water_temp: brew.water_temp,
            weight_in: brew.weight_in,
            weight_out: brew.weight_out,
            brew_time: brew.brew_time.clone(),
            bloom_time: Some(brew.bloom_time),
            details: brew.details.clone(),
            created_at,
            updated_at: None,
        }
    }
}

impl From<BrewRecord> for Brew {
    fn from(record: BrewRecord) -> Self {
        Self {
            id: record.id,
            bean_type: record.bean_type,
            image_url: record.image_url,
            brew_type: record.brew_type,
            water_temp: record.water_temp,
            weight_in: record.weight_in,
            weight_out: record.weight_out,
            brew_time: record.brew_time,
            bloom_time: record.bloom_time.unwrap_or(0),
            details: record.details,
        }
    }
}

/// Request body for create and full-replace update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewPayload {
    pub bean_type: String,
    pub image_url: Option<String>,
    pub brew_type: String,
    pub water_temp: f64,
    pub weight_in: f64,
    pub weight_out: f64,
    pub brew_time: String,
    pub bloom_time: u32,
    pub details: Option<String>,
}

impl From<&NewBrew> for BrewPayload {
    fn from(brew: &NewBrew) -> Self {
        Self {
            bean_type: brew.bean_type.clone(),
            image_url: brew.image_url.clone(),
            brew_type: brew.brew_type.clone(),
            water_temp: brew.water_temp,
            weight_in: brew.weight_in,
            weight_out: brew.weight_out,
            brew_time: brew.brew_time.clone(),
            bloom_time: brew.bloom_time,
            details: brew.details.clone(),
        }
    }
}

impl From<BrewPayload> for NewBrew {
    fn from(payload: BrewPayload) -> Self {
        Self {
            bean_type: payload.bean_type,
            image_url: payload.image_url,
            brew_type: payload.brew_type,
            water_temp: payload.water_temp,
            weight_in: payload.weight_in,
            weight_out: payload.weight_out,
            brew_time: payload.brew_time,
            bloom_time: payload.bloom_time,
            details: payload.details,
        }
    }
}

/// Parses RFC 3339, falling back to a zone-less timestamp read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}")))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}"))),
    }
}
