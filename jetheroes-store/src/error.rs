//! Error types for the store layer.

use jetheroes_types::HeroId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading a hero table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two heroes share an id.
    #[error("duplicate hero id: {0}")]
    DuplicateId(HeroId),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
