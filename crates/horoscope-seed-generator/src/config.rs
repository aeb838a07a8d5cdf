//! Generator configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! `HOROSCOPE_SEED_*` environment variables, then command-line flags.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// Environment variable names.
pub mod env {
    /// Path of a JSON config file.
    pub const CONFIG: &str = "HOROSCOPE_SEED_CONFIG";
    /// Output directory.
    pub const OUTPUT_DIR: &str = "HOROSCOPE_SEED_OUTPUT_DIR";
    /// RNG seed.
    pub const RNG_SEED: &str = "HOROSCOPE_SEED_RNG_SEED";
    /// Customer count.
    pub const CUSTOMERS: &str = "HOROSCOPE_SEED_CUSTOMERS";
    /// Prophet count.
    pub const PROPHETS: &str = "HOROSCOPE_SEED_PROPHETS";
    /// Admin count.
    pub const ADMINS: &str = "HOROSCOPE_SEED_ADMINS";
    /// Days of availability.
    pub const AVAILABILITY_DAYS: &str = "HOROSCOPE_SEED_AVAILABILITY_DAYS";
    /// Include development fixtures.
    pub const DEV_FIXTURES: &str = "HOROSCOPE_SEED_DEV_FIXTURES";
    /// Abort on integrity violations.
    pub const STRICT: &str = "HOROSCOPE_SEED_STRICT";
    /// Reference time, RFC 3339.
    pub const REFERENCE_TIME: &str = "HOROSCOPE_SEED_REFERENCE_TIME";
}

/// Largest accepted count per role.
pub const MAX_ACCOUNTS_PER_ROLE: usize = 100_000;

/// Largest accepted availability horizon.
pub const MAX_AVAILABILITY_DAYS: u32 = 366;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the CSV files are written to (default: "./csv_output").
    pub output_dir: PathBuf,

    /// RNG seed. A random seed is drawn and logged when unset.
    pub seed: Option<u64>,

    /// Customer accounts to generate (default: 100).
    pub customers: usize,

    /// Prophet accounts to generate (default: 50).
    pub prophets: usize,

    /// Admin accounts to generate (default: 10).
    pub admins: usize,

    /// Days of prophet availability from the reference date (default: 30).
    pub availability_days: u32,

    /// Merge the development fixtures into the dataset.
    pub dev_fixtures: bool,

    /// Fail instead of warning when the integrity check finds violations.
    pub strict: bool,

    /// Time stamped on every record and start of availability. Defaults to now.
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./csv_output"),
            seed: None,
            customers: 100,
            prophets: 50,
            admins: 10,
            availability_days: 30,
            dev_fixtures: false,
            strict: false,
            reference_time: None,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overlaid with the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env(|name| std::env::var(name).ok())
    }

    /// Load a JSON config file. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GeneratorError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| GeneratorError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Load the config file (`path`, else `HOROSCOPE_SEED_CONFIG`, else none)
    /// and overlay the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is named but cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_file = std::env::var_os(env::CONFIG).map(PathBuf::from);
        match path.map(Path::to_path_buf).or(env_file) {
            Some(file) => Ok(Self::from_file(file)?.with_env(|name| std::env::var(name).ok())),
            None => Ok(Self::from_env()),
        }
    }

    /// Overlay variables from `lookup`. Unparsable values are logged and ignored.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(env::OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(seed) = parsed(&lookup, env::RNG_SEED) {
            self.seed = Some(seed);
        }
        if let Some(n) = parsed(&lookup, env::CUSTOMERS) {
            self.customers = n;
        }
        if let Some(n) = parsed(&lookup, env::PROPHETS) {
            self.prophets = n;
        }
        if let Some(n) = parsed(&lookup, env::ADMINS) {
            self.admins = n;
        }
        if let Some(days) = parsed(&lookup, env::AVAILABILITY_DAYS) {
            self.availability_days = days;
        }
        if let Some(on) = flag(&lookup, env::DEV_FIXTURES) {
            self.dev_fixtures = on;
        }
        if let Some(on) = flag(&lookup, env::STRICT) {
            self.strict = on;
        }
        if let Some(at) = parsed(&lookup, env::REFERENCE_TIME) {
            self.reference_time = Some(at);
        }
        self
    }

    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Configuration`] naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(GeneratorError::Configuration("output_dir is empty".into()));
        }
        for (name, count) in [
            ("customers", self.customers),
            ("prophets", self.prophets),
            ("admins", self.admins),
        ] {
            if count > MAX_ACCOUNTS_PER_ROLE {
                return Err(GeneratorError::Configuration(format!(
                    "{name} = {count} exceeds {MAX_ACCOUNTS_PER_ROLE}"
                )));
            }
        }
        if self.availability_days > MAX_AVAILABILITY_DAYS {
            return Err(GeneratorError::Configuration(format!(
                "availability_days = {} exceeds {MAX_AVAILABILITY_DAYS}",
                self.availability_days
            )));
        }
        Ok(())
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(var = name, value = %raw, error = %e, "Ignoring invalid environment value");
            None
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    let raw = lookup(name)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => {
            tracing::warn!(var = name, value = %raw, "Ignoring invalid boolean environment value");
            None
        }
    }
}
