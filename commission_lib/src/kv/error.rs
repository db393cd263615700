//! Error types for key-value backends.

use thiserror::Error;

/// Errors from a key-value backend.
#[derive(Error, Debug)]
pub enum KvError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
