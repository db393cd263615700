//! Key-value blob storage behind the deal store.
//!
//! The deal store only needs to read and write one string value under one
//! key; everything else about the backend stays hidden behind this trait.

pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::KvError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A string-to-string store addressed by key.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    /// Inserts or overwrites the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), KvError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        (**self).remove(key)
    }
}
