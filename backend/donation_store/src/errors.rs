//! Store-level error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A protocol rule rejected the operation (validation, not-found,
    /// invalid transition, unauthorized). Re-raised unchanged.
    #[error("{0}")]
    Domain(#[from] foodshare_protocol::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Borrow the domain error, when the failure is one.
    pub fn as_domain(&self) -> Option<&foodshare_protocol::Error> {
        match self {
            StoreError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
