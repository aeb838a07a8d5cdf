//! Error types for a generation run.

use std::path::PathBuf;

use horoscope_seed_core::{SeedError, Table};
use horoscope_seed_store::StoreError;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while configuring, generating or writing a dataset.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A configuration value is out of range.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The config file could not be read.
    #[error("cannot read config file {path}: {source}")]
    ConfigFile {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for this configuration.
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be built.
    #[error(transparent)]
    Model(#[from] SeedError),

    /// Writing output failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The integrity check failed in strict mode.
    #[error("integrity check found {count} violation(s)")]
    Integrity {
        /// Number of violations.
        count: usize,
    },

    /// A written file does not hold the rows that were generated for it.
    #[error("table {table}: wrote {written} rows but found {found}")]
    RowCountMismatch {
        /// The table.
        table: Table,
        /// Rows generated and written.
        written: usize,
        /// Rows read back from the file.
        found: usize,
    },
}
