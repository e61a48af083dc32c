//! Store error types

use thiserror::Error;

/// Errors that can occur during list store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached
    #[error("Store connection error: {0}")]
    ConnectionError(String),

    /// A stored record could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    SerializationError(String),

    /// The backend rejected or failed a command
    #[error("Store backend error: {0}")]
    BackendError(String),
}

impl StoreError {
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
