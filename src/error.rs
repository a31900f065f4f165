//! Error types for data operations

use thiserror::Error;

/// Error types for data-access operations
#[derive(Debug, Error)]
pub enum DataError {
    /// No record with the given id exists in the local store
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The hosted table backend rejected or failed a request
    #[error("remote backend error: {0}")]
    Remote(String),

    /// The persistence port failed to read or write the store blob
    #[error("storage backend error: {0}")]
    Storage(String),

    /// A record could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DataError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DataError>;
