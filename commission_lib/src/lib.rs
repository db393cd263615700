//! Library layer for the commission tracker: deal arithmetic, summary
//! statistics, the submission gate, and the persisted deal collection.
//!
//! The calculator and summary reducer are pure; persistence sits behind the
//! [`kv::KeyValueStore`] trait so the same [`DealStore`] runs on SQLite or in
//! memory.

pub mod calculator;
pub mod config;
pub mod deal;
pub mod draft;
pub mod error;
pub mod ids;
pub mod kv;
pub mod store;
pub mod summary;
pub mod validation;

pub use calculator::{breakdown, compute, parse_amount};
pub use config::{Config, ConfigError};
pub use deal::{CommissionBreakdown, DealInput, DealRecord};
pub use draft::{DealDraft, DraftDefaults, DraftField};
pub use error::CommissionError;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use kv::{KeyValueStore, KvError, MemoryStore, SqliteStore};
pub use store::{DealStore, StoreError, DEFAULT_STORAGE_KEY};
pub use summary::{summarize, SummaryStats};
