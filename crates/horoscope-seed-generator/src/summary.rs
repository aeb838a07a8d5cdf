//! End-of-run report printed to stdout.

use std::collections::BTreeMap;
use std::fmt;

use crate::dataset::Dataset;

/// Headline counts describing how the generated tables relate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relationships {
    /// All accounts.
    pub accounts: usize,
    /// Customer profiles.
    pub customers: usize,
    /// Prophet profiles.
    pub prophets: usize,
    /// Admin profiles.
    pub admins: usize,
    /// Courses open for booking.
    pub active_courses: usize,
    /// All bookings.
    pub bookings: usize,
    /// Completed bookings.
    pub completed_bookings: usize,
    /// Reviews.
    pub reviews: usize,
    /// Reports.
    pub reports: usize,
}

impl Relationships {
    /// Count from an in-memory dataset.
    #[must_use]
    pub fn of(dataset: &Dataset) -> Self {
        Self {
            accounts: dataset.accounts.len(),
            customers: dataset.customers.len(),
            prophets: dataset.prophets.len(),
            admins: dataset.admins.len(),
            active_courses: dataset.active_courses().count(),
            bookings: dataset.bookings.len(),
            completed_bookings: dataset.completed_bookings().count(),
            reviews: dataset.reviews.len(),
            reports: dataset.reports.len(),
        }
    }
}

/// Row counts read back from the output directory plus relationship counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Data rows per CSV file, sorted by file name.
    pub files: BTreeMap<String, usize>,
    /// Relationship counts.
    pub relationships: Relationships,
    /// Seed that reproduces the run.
    pub seed: u64,
}

impl Summary {
    /// Rows across all files.
    #[must_use]
    pub fn total(&self) -> usize {
        self.files.values().sum()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.relationships;
        writeln!(f, "Generated Tables:")?;
        for (file, rows) in &self.files {
            writeln!(f, "  - {file}: {rows} records")?;
        }
        writeln!(f)?;
        writeln!(f, "Total records generated: {}", self.total())?;
        writeln!(f)?;
        writeln!(f, "Relationship Summary:")?;
        writeln!(f, "  - Accounts: {}", r.accounts)?;
        writeln!(f, "    - Customers: {}", r.customers)?;
        writeln!(f, "    - Prophets: {}", r.prophets)?;
        writeln!(f, "    - Admins: {}", r.admins)?;
        writeln!(f, "  - Active Courses: {}", r.active_courses)?;
        writeln!(f, "  - Bookings: {}", r.bookings)?;
        writeln!(f, "    - Completed: {}", r.completed_bookings)?;
        writeln!(f, "  - Reviews: {}", r.reviews)?;
        writeln!(f, "  - Reports: {}", r.reports)?;
        writeln!(f)?;
        write!(f, "Seed: {}", self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_files_in_name_order_with_total() {
        let summary = Summary {
            files: BTreeMap::from([("reviews.csv".to_string(), 3), ("accounts.csv".to_string(), 7)]),
            relationships: Relationships {
                accounts: 7,
                bookings: 4,
                completed_bookings: 2,
                ..Relationships::default()
            },
            seed: 42,
        };

        let text = summary.to_string();
        let accounts = text.find("accounts.csv: 7 records").unwrap();
        let reviews = text.find("reviews.csv: 3 records").unwrap();
        assert!(accounts < reviews);
        assert!(text.contains("Total records generated: 10"));
        assert!(text.contains("    - Completed: 2"));
        assert!(text.ends_with("Seed: 42"));
    }
}
