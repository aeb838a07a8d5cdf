//! Output layer for the horoscope platform seed data generator.
//!
//! This crate writes generated tables as CSV, one file per table, with a header
//! row taken from the record's field names followed by one row per record.
//!
//! # Backends
//!
//! - [`CsvDirectory`]: `<root>/<table>.csv` files on disk
//! - [`MemorySink`]: rendered CSV kept in memory, for tests
//!
//! # Example
//!
//! ```no_run
//! use horoscope_seed_store::{CsvDirectory, TableSink};
//! use horoscope_seed_core::Account;
//!
//! let mut out = CsvDirectory::create("./csv_output").unwrap();
//! let accounts: Vec<Account> = Vec::new();
//! let written = out.write_table(&accounts).unwrap();
//! assert_eq!(written, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod csv_dir;
pub mod error;
pub mod memory;
pub mod schema;

pub use csv_dir::CsvDirectory;
pub use error::{Result, StoreError};
pub use memory::MemorySink;

use horoscope_seed_core::Record;

/// Destination for generated tables.
///
/// Each table is written exactly once per run, in one call.
pub trait TableSink {
    /// Write every row of one table, returning the number of rows written.
    ///
    /// An empty slice writes nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written or a row fails to serialize.
    fn write_table<R: Record>(&mut self, rows: &[R]) -> Result<usize>;
}
