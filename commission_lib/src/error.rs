//! Error types for the library layer.

use std::fmt;

use crate::store::StoreError;

/// Errors produced when a deal submission is turned into a stored record.
///
/// The calculator and the summary reducer are total and never produce one
/// of these; only the submission gate and persistence can fail.
#[derive(Debug)]
pub enum CommissionError {
    /// A submission failed the required-field checks.
    InvalidInput(String),
    /// The deal store rejected a record or could not persist the collection.
    Storage(StoreError),
}

impl fmt::Display for CommissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for CommissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<StoreError> for CommissionError {
    fn from(e: StoreError) -> Self {
        Self::Storage(e)
    }
}
