//! Horoscope seed generator - writes synthetic CSV seed data.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use horoscope_seed_generator::{run, GeneratorConfig};

/// Generate CSV seed data for the horoscope booking platform.
#[derive(Debug, Parser)]
#[command(name = "horoscope-seed", version, about)]
struct Cli {
    /// JSON config file (overrides HOROSCOPE_SEED_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write the CSV files to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of customer accounts.
    #[arg(long)]
    customers: Option<usize>,

    /// Number of prophet accounts.
    #[arg(long)]
    prophets: Option<usize>,

    /// Number of admin accounts.
    #[arg(long)]
    admins: Option<usize>,

    /// Days of prophet availability from the reference date.
    #[arg(long)]
    days: Option<u32>,

    /// Include the development fixtures (`--dev-fixtures=false` turns off a
    /// configured value).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    dev_fixtures: Option<bool>,

    /// Fail on integrity violations instead of warning (`--strict=false`
    /// turns off a configured value).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    strict: Option<bool>,

    /// Reference time (RFC 3339) stamped on every record.
    #[arg(long)]
    reference_time: Option<DateTime<Utc>>,
}

impl Cli {
    fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        config.seed = self.seed.or(config.seed);
        config.customers = self.customers.unwrap_or(config.customers);
        config.prophets = self.prophets.unwrap_or(config.prophets);
        config.admins = self.admins.unwrap_or(config.admins);
        config.availability_days = self.days.unwrap_or(config.availability_days);
        config.dev_fixtures = self.dev_fixtures.unwrap_or(config.dev_fixtures);
        config.strict = self.strict.unwrap_or(config.strict);
        config.reference_time = self.reference_time.or(config.reference_time);
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,horoscope_seed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::load(cli.config.as_deref())?;
    let config = cli.apply(config);

    tracing::info!(
        output_dir = %config.output_dir.display(),
        customers = config.customers,
        prophets = config.prophets,
        admins = config.admins,
        days = config.availability_days,
        dev_fixtures = config.dev_fixtures,
        strict = config.strict,
        "Generator configuration loaded"
    );

    let summary = run(&config)?;
    println!("{summary}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(args: &[&str]) -> GeneratorConfig {
        let base = GeneratorConfig {
            dev_fixtures: true,
            strict: true,
            ..GeneratorConfig::default()
        };
        Cli::try_parse_from(args.iter().copied()).unwrap().apply(base)
    }

    #[test]
    fn flags_override_config() {
        let config = configured(&["horoscope-seed", "--seed", "7", "--days", "3", "--output-dir", "x"]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.availability_days, 3);
        assert_eq!(config.output_dir, PathBuf::from("x"));
        assert_eq!(config.customers, 100);
    }

    #[test]
    fn boolean_flags_switch_both_ways() {
        let kept = configured(&["horoscope-seed"]);
        assert!(kept.dev_fixtures && kept.strict);

        let off = configured(&["horoscope-seed", "--dev-fixtures=false", "--strict=false"]);
        assert!(!off.dev_fixtures && !off.strict);

        let on = Cli::try_parse_from(["horoscope-seed", "--dev-fixtures", "--strict"])
            .unwrap()
            .apply(GeneratorConfig::default());
        assert!(on.dev_fixtures && on.strict);
    }
}
