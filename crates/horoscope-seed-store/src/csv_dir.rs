//! CSV files in an output directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use horoscope_seed_core::{Record, Table};

use crate::error::{Result, StoreError};
use crate::schema::{self, CSV_EXTENSION};
use crate::TableSink;

/// Writes each table to `<root>/<table>.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    /// Open an output directory, creating it (and its parents) if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        tracing::debug!(path = %root.display(), "Output directory ready");
        Ok(Self { root })
    }

    /// The output directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a table's file.
    #[must_use]
    pub fn table_path(&self, table: Table) -> PathBuf {
        schema::table_path(&self.root, table)
    }

    /// Count the data rows in a table's file, or `None` if it was not written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn count_rows(&self, table: Table) -> Result<Option<usize>> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(None);
        }
        count_csv_rows(&path).map(Some)
    }

    /// Data row counts of every CSV file in the directory, keyed and sorted by file name.
    ///
    /// Files that do not belong to a known table are included too.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed or a file cannot be parsed.
    pub fn file_counts(&self) -> Result<BTreeMap<String, usize>> {
        let io_err = |source| StoreError::Io {
            path: self.root.clone(),
            source,
        };
        let mut counts = BTreeMap::new();
        for entry in fs::read_dir(&self.root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CSV_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            counts.insert(name.to_string(), count_csv_rows(&path)?);
        }
        Ok(counts)
    }
}

impl TableSink for CsvDirectory {
    fn write_table<R: Record>(&mut self, rows: &[R]) -> Result<usize> {
        let table = R::TABLE;
        let path = self.table_path(table);

        if rows.is_empty() {
            tracing::warn!(%table, "No data to save");
            // A file left over from an earlier run would no longer match this run's dataset.
            if path.exists() {
                fs::remove_file(&path).map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "Removed stale table file");
            }
            return Ok(0);
        }

        let csv_err = |source| StoreError::Csv {
            path: path.clone(),
            source,
        };
        let mut writer = csv::Writer::from_path(&path).map_err(csv_err)?;
        for row in rows {
            writer.serialize(row).map_err(csv_err)?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(%table, rows = rows.len(), path = %path.display(), "Saved table");
        Ok(rows.len())
    }
}

fn count_csv_rows(path: &Path) -> Result<usize> {
    let csv_err = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let mut count = 0;
    for record in reader.records() {
        record.map_err(csv_err)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use horoscope_seed_core::{Admin, AdminId, AccountId};
    use tempfile::TempDir;

    fn admins(n: usize) -> Vec<Admin> {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        (0..n)
            .map(|_| Admin {
                id: AdminId::generate(),
                account_id: AccountId::generate(),
                created_at: at,
                updated_at: at,
            })
            .collect()
    }

    #[test]
    fn creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a").join("b");
        let dir = CsvDirectory::create(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(dir.root(), root.as_path());
    }

    #[test]
    fn written_rows_are_counted_back() {
        let temp = TempDir::new().unwrap();
        let mut dir = CsvDirectory::create(temp.path()).unwrap();

        assert_eq!(dir.write_table(&admins(4)).unwrap(), 4);
        assert_eq!(dir.count_rows(Table::Admins).unwrap(), Some(4));
        assert_eq!(dir.count_rows(Table::Reports).unwrap(), None);
    }

    #[test]
    fn empty_table_removes_stale_file() {
        let temp = TempDir::new().unwrap();
        let mut dir = CsvDirectory::create(temp.path()).unwrap();

        dir.write_table(&admins(2)).unwrap();
        assert!(dir.table_path(Table::Admins).exists());

        assert_eq!(dir.write_table::<Admin>(&[]).unwrap(), 0);
        assert!(!dir.table_path(Table::Admins).exists());
    }

    #[test]
    fn file_counts_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        let mut dir = CsvDirectory::create(temp.path()).unwrap();
        dir.write_table(&admins(3)).unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::write(temp.path().join("extra.csv"), "a,b\n1,2\n3,4\n").unwrap();

        let counts = dir.file_counts().unwrap();
        let names: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(names, ["admins.csv", "extra.csv"]);
        assert_eq!(counts["admins.csv"], 3);
        assert_eq!(counts["extra.csv"], 2);
    }
}
