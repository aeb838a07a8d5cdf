//! Table names and the record-to-table mapping.

use std::fmt;

use serde::Serialize;

/// A table of the platform schema.
///
/// Variants are declared parent-first, so the derived ordering is an import
/// order that respects foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    /// `accounts`
    Accounts,
    /// `horoscope_methods`
    HoroscopeMethods,
    /// `user_details`
    UserDetails,
    /// `customers`
    Customers,
    /// `prophets`
    Prophets,
    /// `admins`
    Admins,
    /// `prophet_methods`
    ProphetMethods,
    /// `prophet_availabilities`
    ProphetAvailabilities,
    /// `courses`
    Courses,
    /// `bookings`
    Bookings,
    /// `transactions`
    Transactions,
    /// `transaction_accounts`
    TransactionAccounts,
    /// `reviews`
    Reviews,
    /// `reports`
    Reports,
}

impl Table {
    /// Every table, in import order.
    pub const ALL: [Self; 14] = [
        Self::Accounts,
        Self::HoroscopeMethods,
        Self::UserDetails,
        Self::Customers,
        Self::Prophets,
        Self::Admins,
        Self::ProphetMethods,
        Self::ProphetAvailabilities,
        Self::Courses,
        Self::Bookings,
        Self::Transactions,
        Self::TransactionAccounts,
        Self::Reviews,
        Self::Reports,
    ];

    /// The table name, also used as the output file stem.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::HoroscopeMethods => "horoscope_methods",
            Self::UserDetails => "user_details",
            Self::Customers => "customers",
            Self::Prophets => "prophets",
            Self::Admins => "admins",
            Self::ProphetMethods => "prophet_methods",
            Self::ProphetAvailabilities => "prophet_availabilities",
            Self::Courses => "courses",
            Self::Bookings => "bookings",
            Self::Transactions => "transactions",
            Self::TransactionAccounts => "transaction_accounts",
            Self::Reviews => "reviews",
            Self::Reports => "reports",
        }
    }

    /// Look up a table by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A row type belonging to exactly one table.
pub trait Record: Serialize {
    /// The table this record is written to.
    const TABLE: Table;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for table in Table::ALL {
            assert_eq!(Table::from_name(table.name()), Some(table));
        }
        assert_eq!(Table::from_name("sessions"), None);
    }

    #[test]
    fn parents_sort_before_children() {
        assert!(Table::Accounts < Table::Customers);
        assert!(Table::Prophets < Table::Courses);
        assert!(Table::Courses < Table::Bookings);
        assert!(Table::Bookings < Table::Reviews);
        assert!(Table::Admins < Table::Reports);
    }
}
