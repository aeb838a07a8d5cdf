//! Common test utilities for generator integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use horoscope_seed_generator::{Dataset, GeneratorConfig, SeedContext};

/// Fixed reference time so seeded runs are identical.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 14, 8, 0, 0).unwrap()
}

/// A small configuration with a fixed seed and reference time.
pub fn small_config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(seed),
        customers: 60,
        prophets: 12,
        admins: 3,
        availability_days: 14,
        reference_time: Some(reference_time()),
        ..GeneratorConfig::default()
    }
}

/// Generate a dataset in memory from a configuration with a fixed seed.
pub fn generate(config: &GeneratorConfig) -> Dataset {
    let seed = config.seed.expect("test configs carry a seed");
    let now = config.reference_time.unwrap_or_else(reference_time);
    let mut ctx = SeedContext::new(seed, now);
    Dataset::generate(config, &mut ctx).expect("Failed to generate dataset")
}

/// Output directory for a run (kept alive for test duration).
pub struct OutputDir {
    /// Temporary directory.
    pub temp_dir: TempDir,
}

impl OutputDir {
    /// Create a fresh output directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Point a configuration at a `csv` subdirectory that does not exist yet.
    pub fn configure(&self, config: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: self.temp_dir.path().join("csv"),
            ..config
        }
    }
}
