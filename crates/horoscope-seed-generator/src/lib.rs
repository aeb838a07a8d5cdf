//! Synthetic seed data for the horoscope booking platform.
//!
//! Generates accounts, role profiles, the divination method catalog, prophet
//! availability, courses, bookings with their transactions, payout accounts,
//! reviews and reports, and writes each table as a CSV file ready for import.
//!
//! # Flow
//!
//! 1. [`GeneratorConfig`] is validated and a [`SeedContext`] is seeded.
//! 2. [`Dataset::generate`] builds every table in memory, parents first.
//! 3. [`integrity::check`] verifies references and booking rules.
//! 4. [`Dataset::write_to`] writes the tables through a [`TableSink`].
//! 5. Row counts are re-read from disk and returned as a [`Summary`].
//!
//! A run is fully determined by its seed and reference time.
//!
//! [`TableSink`]: horoscope_seed_store::TableSink

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod fixtures;
pub mod generate;
pub mod integrity;
pub mod pools;
pub mod summary;

pub use config::GeneratorConfig;
pub use context::SeedContext;
pub use dataset::{Dataset, WriteReport};
pub use error::{GeneratorError, Result};
pub use integrity::{IntegrityReport, Violation};
pub use summary::{Relationships, Summary};

use chrono::Utc;
use horoscope_seed_core::Table;
use horoscope_seed_store::schema::table_from_file_name;
use horoscope_seed_store::CsvDirectory;

/// Generate a dataset and write it to `config.output_dir`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the integrity check
/// fails in strict mode, or the output cannot be written and verified.
pub fn run(config: &GeneratorConfig) -> Result<Summary> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let now = config.reference_time.unwrap_or_else(Utc::now);
    tracing::info!(seed, reference_time = %now, "Seeding random generator");
    let mut ctx = SeedContext::new(seed, now);

    let dataset = Dataset::generate(config, &mut ctx)?;

    let report = integrity::check(&dataset);
    for violation in &report.violations {
        tracing::warn!(%violation, "Integrity violation");
    }
    if !report.is_clean() && config.strict {
        return Err(GeneratorError::Integrity { count: report.len() });
    }

    let mut out = CsvDirectory::create(&config.output_dir)?;
    let written = dataset.write_to(&mut out)?;
    verify_written(&out, &written)?;
    tracing::info!(
        rows = written.total(),
        path = %out.root().display(),
        "CSV files generated"
    );

    let files = out.file_counts()?;
    for name in files.keys().filter(|name| table_from_file_name(name).is_none()) {
        tracing::warn!(file = %name, "Unrecognized CSV file in output directory");
    }

    Ok(Summary {
        files,
        relationships: Relationships::of(&dataset),
        seed,
    })
}

/// Re-read every table file and compare with what was written.
fn verify_written(out: &CsvDirectory, written: &WriteReport) -> Result<()> {
    for table in Table::ALL {
        let expected = written.rows.get(&table).copied().unwrap_or(0);
        let found = out.count_rows(table)?.unwrap_or(0);
        if found != expected {
            return Err(GeneratorError::RowCountMismatch {
                table,
                written: expected,
                found,
            });
        }
    }
    Ok(())
}
