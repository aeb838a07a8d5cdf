//! Output file naming.
//!
//! Each table is stored in `<root>/<table name>.csv`.

use std::path::{Path, PathBuf};

use horoscope_seed_core::Table;

/// Extension of every output file.
pub const CSV_EXTENSION: &str = "csv";

/// File name of a table's output.
#[must_use]
pub fn file_name(table: Table) -> String {
    format!("{}.{CSV_EXTENSION}", table.name())
}

/// Full path of a table's output under `root`.
#[must_use]
pub fn table_path(root: &Path, table: Table) -> PathBuf {
    root.join(file_name(table))
}

/// Recover the table from an output file name.
#[must_use]
pub fn table_from_file_name(name: &str) -> Option<Table> {
    name.strip_suffix(CSV_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .and_then(Table::from_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(file_name(Table::ProphetAvailabilities), "prophet_availabilities.csv");
        assert_eq!(
            table_path(Path::new("/tmp/out"), Table::Accounts),
            PathBuf::from("/tmp/out/accounts.csv")
        );
    }

    #[test]
    fn file_name_roundtrip() {
        for table in Table::ALL {
            assert_eq!(table_from_file_name(&file_name(table)), Some(table));
        }
        assert_eq!(table_from_file_name("accounts.json"), None);
        assert_eq!(table_from_file_name("notes.csv"), None);
    }
}
