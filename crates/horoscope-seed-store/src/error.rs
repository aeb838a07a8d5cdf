//! Error types for seed output.

use std::path::PathBuf;

use horoscope_seed_core::Table;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while writing or re-reading tables.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a CSV file failed.
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// A row could not be rendered.
    #[error("serialization error in table {table}: {message}")]
    Serialization {
        /// The table being rendered.
        table: Table,
        /// Error message.
        message: String,
    },
}
