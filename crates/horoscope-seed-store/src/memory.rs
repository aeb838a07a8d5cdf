//! In-memory sink for testing.

use std::collections::BTreeMap;

use horoscope_seed_core::{Record, Table};

use crate::error::{Result, StoreError};
use crate::TableSink;

/// Keeps each written table as rendered CSV text.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: BTreeMap<Table, Rendered>,
}

#[derive(Debug)]
struct Rendered {
    text: String,
    rows: usize,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered CSV of a table, if it was written.
    #[must_use]
    pub fn csv(&self, table: Table) -> Option<&str> {
        self.tables.get(&table).map(|r| r.text.as_str())
    }

    /// The header line of a table, if it was written.
    #[must_use]
    pub fn header(&self, table: Table) -> Option<&str> {
        self.csv(table).and_then(|text| text.lines().next())
    }

    /// Number of data rows written for a table (0 if it was skipped).
    #[must_use]
    pub fn row_count(&self, table: Table) -> usize {
        self.tables.get(&table).map_or(0, |r| r.rows)
    }

    /// Tables that were written, in import order.
    pub fn tables(&self) -> impl Iterator<Item = Table> + '_ {
        self.tables.keys().copied()
    }
}

impl TableSink for MemorySink {
    fn write_table<R: Record>(&mut self, rows: &[R]) -> Result<usize> {
        let table = R::TABLE;
        if rows.is_empty() {
            tracing::warn!(%table, "No data to save");
            self.tables.remove(&table);
            return Ok(0);
        }

        let ser_err = |message: String| StoreError::Serialization { table, message };
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row).map_err(|e| ser_err(e.to_string()))?;
        }
        let bytes = writer.into_inner().map_err(|e| ser_err(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| ser_err(e.to_string()))?;

        self.tables.insert(
            table,
            Rendered {
                text,
                rows: rows.len(),
            },
        );
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horoscope_seed_core::{HoroscopeMethod, MethodId, ProphetId, ProphetMethod};

    #[test]
    fn header_follows_field_order() {
        let mut sink = MemorySink::new();
        let methods = vec![
            HoroscopeMethod::new(MethodId::new(1), "Tarot Reading"),
            HoroscopeMethod::new(MethodId::new(2), "Palm Reading"),
        ];
        assert_eq!(sink.write_table(&methods).unwrap(), 2);
        assert_eq!(sink.header(Table::HoroscopeMethods), Some("id,slug,name"));
        assert_eq!(
            sink.csv(Table::HoroscopeMethods).unwrap(),
            "id,slug,name\n1,tarot_reading,Tarot Reading\n2,palm_reading,Palm Reading\n"
        );
    }

    #[test]
    fn empty_tables_are_skipped() {
        let mut sink = MemorySink::new();
        assert_eq!(sink.write_table::<ProphetMethod>(&[]).unwrap(), 0);
        assert_eq!(sink.row_count(Table::ProphetMethods), 0);
        assert!(sink.csv(Table::ProphetMethods).is_none());
    }

    #[test]
    fn tables_listed_in_import_order() {
        let mut sink = MemorySink::new();
        let links = vec![ProphetMethod {
            prophet_id: ProphetId::generate(),
            method_id: MethodId::new(1),
        }];
        sink.write_table(&links).unwrap();
        sink.write_table(&[HoroscopeMethod::new(MethodId::new(1), "Numerology")])
            .unwrap();
        let tables: Vec<Table> = sink.tables().collect();
        assert_eq!(tables, [Table::HoroscopeMethods, Table::ProphetMethods]);
    }
}
