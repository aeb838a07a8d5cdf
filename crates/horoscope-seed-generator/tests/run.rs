//! End-to-end runs writing to a temporary directory.

mod common;

use std::fs;

use common::OutputDir;
use horoscope_seed_core::Table;
use horoscope_seed_generator::{run, GeneratorConfig, GeneratorError};

#[test]
fn run_writes_every_table_and_counts_match() {
    let out = OutputDir::new();
    let config = out.configure(common::small_config(21));

    let summary = run(&config).unwrap();
    let data = common::generate(&config);

    assert_eq!(summary.seed, 21);
    for table in Table::ALL {
        let rows = data.row_count(table);
        let file = format!("{}.csv", table.name());
        assert_eq!(summary.files.get(&file).copied(), (rows > 0).then_some(rows), "{file}");
    }
    assert_eq!(summary.relationships.accounts, data.accounts.len());
    assert_eq!(summary.relationships.bookings, data.bookings.len());
}

#[test]
fn headers_follow_field_order() {
    let out = OutputDir::new();
    let config = out.configure(common::small_config(4));
    run(&config).unwrap();

    let bookings = fs::read_to_string(config.output_dir.join("bookings.csv")).unwrap();
    assert_eq!(
        bookings.lines().next().unwrap(),
        "id,customer_id,course_id,prophet_id,start_datetime,end_datetime,status,created_at"
    );
    let courses = fs::read_to_string(config.output_dir.join("courses.csv")).unwrap();
    let first_row = courses.lines().nth(1).unwrap();
    let price = first_row.split(',').nth(6).unwrap();
    assert!(price.contains('.') && price.split('.').nth(1).unwrap().len() == 2);
}

#[test]
fn empty_tables_leave_no_file() {
    let out = OutputDir::new();
    let config = out.configure(GeneratorConfig {
        admins: 0,
        ..common::small_config(6)
    });
    let summary = run(&config).unwrap();

    assert!(!config.output_dir.join("admins.csv").exists());
    assert!(!summary.files.contains_key("admins.csv"));
}

#[test]
fn rerun_replaces_previous_output() {
    let out = OutputDir::new();
    let first = out.configure(common::small_config(9));
    run(&first).unwrap();
    assert!(first.output_dir.join("admins.csv").exists());

    let second = GeneratorConfig { admins: 0, ..first };
    let summary = run(&second).unwrap();
    assert!(!second.output_dir.join("admins.csv").exists());
    assert_eq!(summary.relationships.admins, 0);
}

#[test]
fn invalid_config_is_rejected_before_writing() {
    let out = OutputDir::new();
    let config = out.configure(GeneratorConfig {
        availability_days: 10_000,
        ..common::small_config(1)
    });

    let err = run(&config).unwrap_err();
    assert!(matches!(err, GeneratorError::Configuration(_)));
    assert!(!config.output_dir.exists());
}

#[test]
fn strict_mode_passes_on_clean_data() {
    let out = OutputDir::new();
    let config = out.configure(GeneratorConfig {
        strict: true,
        dev_fixtures: true,
        ..common::small_config(13)
    });
    let summary = run(&config).unwrap();
    assert_eq!(summary.relationships.prophets, 13);
}
