//! The deal collection and its load-once / save-on-mutation lifecycle.
//!
//! A [`DealStore`] owns the in-memory collection for the lifetime of the
//! session. It reads the persisted blob exactly once in [`DealStore::load`]
//! and writes the whole collection back after every `add` and `remove`.

use std::collections::HashSet;

use thiserror::Error;

use crate::deal::DealRecord;
use crate::kv::{KeyValueStore, KvError};
use crate::summary::{summarize, SummaryStats};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "realtor_commission_deals";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(#[from] KvError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a deal with id '{0}' already exists")]
    DuplicateId(String),
}

/// Newest-first collection of deals persisted under a single key.
pub struct DealStore<S> {
    backend: S,
    key: String,
    deals: Vec<DealRecord>,
}

impl<S: KeyValueStore> DealStore<S> {
    /// Read the persisted collection from `backend`.
    ///
    /// A missing key, a backend failure, or a blob that does not parse all
    /// yield an empty collection. Later duplicates of an id are dropped.
    pub fn load(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let deals = match read_collection(&backend, &key) {
            Ok(Some(deals)) => dedupe(deals),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable deal collection '{}': {}", key, e);
                Vec::new()
            }
        };
        tracing::debug!("loaded {} deals from '{}'", deals.len(), key);
        Self {
            backend,
            key,
            deals,
        }
    }

    /// All deals, newest first.
    pub fn records(&self) -> &[DealRecord] {
        &self.deals
    }

    pub fn get(&self, id: &str) -> Option<&DealRecord> {
        self.deals.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Summary statistics for the current collection.
    pub fn summary(&self) -> SummaryStats {
        summarize(&self.deals)
    }

    /// Prepend `record` and persist.
    ///
    /// A record whose id is already present is rejected and nothing changes.
    /// If the write fails the prepend is undone, so memory matches what was
    /// last persisted.
    pub fn add(&mut self, record: DealRecord) -> Result<(), StoreError> {
        if self.get(&record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }
        tracing::debug!("adding deal {}", record.id);
        self.deals.insert(0, record);
        if let Err(e) = self.save() {
            self.deals.remove(0);
            return Err(e);
        }
        Ok(())
    }

    /// Remove the deal with `id` and persist. Returns `None` without writing
    /// when no deal matches. A failed write puts the deal back in place.
    pub fn remove(&mut self, id: &str) -> Result<Option<DealRecord>, StoreError> {
        let Some(index) = self.deals.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        let removed = self.deals.remove(index);
        if let Err(e) = self.save() {
            self.deals.insert(index, removed);
            return Err(e);
        }
        tracing::debug!("removed deal {}", removed.id);
        Ok(Some(removed))
    }

    /// Serialize the whole collection under the store's key.
    pub fn save(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.deals)?;
        self.backend.set(&self.key, &blob)?;
        Ok(())
    }
}

fn read_collection<S: KeyValueStore>(
    backend: &S,
    key: &str,
) -> Result<Option<Vec<DealRecord>>, StoreError> {
    let Some(raw) = backend.get(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

fn dedupe(deals: Vec<DealRecord>) -> Vec<DealRecord> {
    let mut seen = HashSet::new();
    let total = deals.len();
    let kept: Vec<DealRecord> = deals
        .into_iter()
        .filter(|d| seen.insert(d.id.clone()))
        .collect();
    if kept.len() < total {
        tracing::warn!("Dropped {} deals with repeated ids", total - kept.len());
    }
    kept
}
