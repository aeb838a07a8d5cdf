//! Error types for seed records.

use crate::ids::IdError;

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, SeedError>;

/// Errors that can occur when building or parsing seed records.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// Invalid price literal.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
}
