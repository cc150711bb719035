//! In-process stand-in for the brews server.
//!
//! Stores wire records behind a shared handle so tests (and offline runs of
//! the binary) can seed data, inspect what the client sent, and make specific
//! operations fail.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::api::backend::{BrewApi, Operation};
use crate::api::models::{BrewPayload, BrewRecord};
use crate::domain::{Brew, BrewlogError, NewBrew, Result};

/// Status reported for injected failures.
const UNAVAILABLE: u16 = 503;

#[derive(Debug, Default)]
struct Store {
    records: Vec<BrewRecord>,
    next_id: i64,
    failing: HashSet<Operation>,
}

/// Brew API kept entirely in memory.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBrewApi {
    store: Arc<Mutex<Store>>,
}

impl InMemoryBrewApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `brews`, listed in the given order.
    #[must_use]
    pub fn with_brews(brews: &[Brew]) -> Self {
        let api = Self::new();
        {
            let mut store = api.lock();
            let now = Utc::now();
            store.records = brews.iter().map(|brew| BrewRecord::from_brew(brew, now)).collect();
            store.next_id = brews.iter().map(|brew| brew.id).max().unwrap_or(0);
        }
        api
    }

    /// Makes every later call of `operation` fail until [`recover`](Self::recover).
    pub fn fail(&self, operation: Operation) {
        self.lock().failing.insert(operation);
    }

    /// Clears all injected failures.
    pub fn recover(&self) {
        self.lock().failing.clear();
    }

    /// Snapshot of the stored brews.
    #[must_use]
    pub fn brews(&self) -> Vec<Brew> {
        self.lock().records.iter().cloned().map(Brew::from).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn guard(&self, operation: Operation) -> Result<MutexGuard<'_, Store>> {
        let store = self.lock();
        if store.failing.contains(&operation) {
            return Err(BrewlogError::Api {
                operation: operation.describe().to_string(),
                status: UNAVAILABLE,
            });
        }
        Ok(store)
    }
}

impl BrewApi for InMemoryBrewApi {
    fn list(&mut self) -> Result<Vec<Brew>> {
        let store = self.guard(Operation::Load)?;
        Ok(store.records.iter().cloned().map(Brew::from).collect())
    }

    fn create(&mut self, brew: &NewBrew) -> Result<Brew> {
        let mut store = self.guard(Operation::Create)?;
        store.next_id += 1;
        let payload = BrewPayload::from(brew);
        let created = Brew::from_new(store.next_id, payload.into());
        store.records.insert(0, BrewRecord::from_brew(&created, Utc::now()));
        Ok(created)
    }

    fn update(&mut self, id: i64, brew: &NewBrew) -> Result<Brew> {
        let mut store = self.guard(Operation::Update)?;
        let record = store
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(BrewlogError::NotFound(id))?;

        let updated = Brew::from_new(id, BrewPayload::from(brew).into());
        let created_at = record.created_at;
        *record = BrewRecord {
            updated_at: Some(Utc::now()),
            ..BrewRecord::from_brew(&updated, created_at)
        };
        Ok(updated)
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let mut store = self.guard(Operation::Delete)?;
        let before = store.records.len();
        store.records.retain(|record| record.id != id);
        if store.records.len() == before {
            return Err(BrewlogError::NotFound(id));
        }
        Ok(())
    }
}
