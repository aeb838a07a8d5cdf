//! CSV directory integration tests.

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use horoscope_seed_core::{
    AdminId, Bank, CustomerId, ProphetId, Report, ReportId, ReportStatus, ReportType, Table,
    TransactionAccount, TransactionAccountId,
};
use horoscope_seed_store::{CsvDirectory, TableSink};

fn timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap()
}

fn report(admin: Option<AdminId>) -> Report {
    let report_status = if admin.is_some() {
        ReportStatus::Done
    } else {
        ReportStatus::Pending
    };
    Report {
        id: ReportId::generate(),
        customer_id: CustomerId::generate(),
        admin_id: admin,
        report_type: ReportType::PaymentIssue,
        topic: "Payment Problem".into(),
        description: "Payment was processed but booking wasn't confirmed.".into(),
        report_status,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

#[test]
fn unassigned_report_has_empty_admin_column() {
    let temp = TempDir::new().unwrap();
    let mut out = CsvDirectory::create(temp.path()).unwrap();

    let rows = vec![report(None), report(Some(AdminId::generate()))];
    out.write_table(&rows).unwrap();

    let text = std::fs::read_to_string(out.table_path(Table::Reports)).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,customer_id,admin_id,report_type,topic,description,report_status,created_at,updated_at"
    );
    let first = lines.next().unwrap();
    assert!(first.contains(",,PAYMENT_ISSUE,"));
    assert!(first.contains(",PENDING,"));

    let mut reader = csv::Reader::from_path(out.table_path(Table::Reports)).unwrap();
    let parsed: Vec<Report> = reader.deserialize().map(Result::unwrap).collect();
    assert_eq!(parsed, rows);
}

#[test]
fn account_numbers_keep_leading_zeros() {
    let temp = TempDir::new().unwrap();
    let mut out = CsvDirectory::create(temp.path()).unwrap();

    let account = TransactionAccount {
        id: TransactionAccountId::generate(),
        prophet_id: ProphetId::generate(),
        account_name: "Jane Smith".into(),
        account_number: "0987654321".into(),
        bank: Bank::Scb,
        created_at: timestamp(),
        updated_at: timestamp(),
    };
    out.write_table(&[account.clone()]).unwrap();

    let mut reader = csv::Reader::from_path(out.table_path(Table::TransactionAccounts)).unwrap();
    let parsed: Vec<TransactionAccount> = reader.deserialize().map(Result::unwrap).collect();
    assert_eq!(parsed, vec![account]);
    assert_eq!(parsed[0].account_number, "0987654321");
}

#[test]
fn counts_match_written_rows_across_tables() {
    let temp = TempDir::new().unwrap();
    let mut out = CsvDirectory::create(temp.path()).unwrap();

    let reports: Vec<Report> = (0..5).map(|_| report(None)).collect();
    assert_eq!(out.write_table(&reports).unwrap(), 5);

    let counts = out.file_counts().unwrap();
    assert_eq!(counts.get("reports.csv"), Some(&5));
    assert_eq!(counts.len(), 1);
}
