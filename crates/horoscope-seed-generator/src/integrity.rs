//! Cross-table consistency check over a generated dataset.
//!
//! Runs before anything is written. Every reference must resolve, profiles
//! must sit on accounts of the matching role, and bookings must fit the
//! prophet's free slots without overlapping each other.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{Duration, NaiveDateTime};
use horoscope_seed_core::{
    AccountId, Bank, BookingId, BookingStatus, CourseId, MethodId, ProphetId, ReviewId, Role,
    Table, SLOT_MINUTES,
};

use crate::dataset::Dataset;

/// One broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two accounts share an email.
    DuplicateEmail(String),
    /// Two accounts share a username.
    DuplicateUsername(String),
    /// A column points at a record that does not exist.
    DanglingReference {
        /// Table holding the reference.
        table: Table,
        /// Referencing column.
        column: &'static str,
        /// The missing id.
        id: String,
    },
    /// A profile is attached to an account of another role.
    WrongRole {
        /// Profile table.
        table: Table,
        /// The account.
        account_id: AccountId,
        /// The account's actual role.
        role: Role,
    },
    /// Two bookings of the same prophet overlap.
    OverlappingBookings {
        /// The prophet.
        prophet_id: ProphetId,
        /// Earlier booking.
        first: BookingId,
        /// Later booking.
        second: BookingId,
    },
    /// A booking covers time the prophet is not available.
    OutsideAvailability(BookingId),
    /// A booking's prophet differs from its course's prophet.
    ProphetMismatch(BookingId),
    /// A payout account repeats a (prophet, bank, number) combination.
    DuplicatePayoutAccount {
        /// The prophet.
        prophet_id: ProphetId,
        /// The bank.
        bank: Bank,
        /// The account number.
        account_number: String,
    },
    /// A course uses a method its prophet does not offer.
    MethodNotOffered {
        /// The course.
        course_id: CourseId,
        /// The method.
        method_id: MethodId,
    },
    /// A review is attached to a booking that is not completed.
    ReviewOfIncompleteBooking(ReviewId),
    /// A review is written by someone other than the booking's customer.
    ReviewerMismatch(ReviewId),
    /// A booking has more than one transaction.
    DuplicateTransaction(BookingId),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEmail(email) => write!(f, "duplicate email {email}"),
            Self::DuplicateUsername(username) => write!(f, "duplicate username {username}"),
            Self::DanglingReference { table, column, id } => {
                write!(f, "{table}.{column} references missing {id}")
            }
            Self::WrongRole {
                table,
                account_id,
                role,
            } => write!(f, "{table} row uses account {account_id} with role {role:?}"),
            Self::OverlappingBookings {
                prophet_id,
                first,
                second,
            } => write!(f, "bookings {first} and {second} overlap for prophet {prophet_id}"),
            Self::OutsideAvailability(id) => write!(f, "booking {id} is outside availability"),
            Self::ProphetMismatch(id) => write!(f, "booking {id} prophet differs from course prophet"),
            Self::DuplicatePayoutAccount {
                prophet_id,
                bank,
                account_number,
            } => write!(
                f,
                "payout account {bank:?} {account_number} repeated for prophet {prophet_id}"
            ),
            Self::MethodNotOffered {
                course_id,
                method_id,
            } => write!(f, "course {course_id} uses method {method_id} not offered by its prophet"),
            Self::ReviewOfIncompleteBooking(id) => {
                write!(f, "review {id} is for a booking that is not completed")
            }
            Self::ReviewerMismatch(id) => write!(f, "review {id} is not by the booking's customer"),
            Self::DuplicateTransaction(id) => write!(f, "booking {id} has several transactions"),
        }
    }
}

/// Outcome of [`check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Every violation found, in check order.
    pub violations: Vec<Violation>,
}

impl IntegrityReport {
    /// Whether no violation was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the report is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    fn dangling(&mut self, table: Table, column: &'static str, id: impl ToString) {
        self.violations.push(Violation::DanglingReference {
            table,
            column,
            id: id.to_string(),
        });
    }
}

/// Check a dataset for broken references and rule violations.
#[must_use]
pub fn check(dataset: &Dataset) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    check_accounts(dataset, &mut report);
    check_prophet_tables(dataset, &mut report);
    check_bookings(dataset, &mut report);
    check_feedback(dataset, &mut report);
    report
}

fn check_accounts(dataset: &Dataset, report: &mut IntegrityReport) {
    let mut emails = HashSet::new();
    let mut usernames = HashSet::new();
    for account in &dataset.accounts {
        if !emails.insert(account.email.as_str()) {
            report.violations.push(Violation::DuplicateEmail(account.email.clone()));
        }
        if !usernames.insert(account.username.as_str()) {
            report
                .violations
                .push(Violation::DuplicateUsername(account.username.clone()));
        }
    }

    let roles: HashMap<&AccountId, Role> =
        dataset.accounts.iter().map(|a| (&a.id, a.role)).collect();
    for detail in &dataset.user_details {
        if !roles.contains_key(&detail.account_id) {
            report.dangling(Table::UserDetails, "account_id", &detail.account_id);
        }
    }

    let profiles = dataset
        .customers
        .iter()
        .map(|c| (Table::Customers, Role::Customer, &c.account_id))
        .chain(dataset.prophets.iter().map(|p| (Table::Prophets, Role::Prophet, &p.account_id)))
        .chain(dataset.admins.iter().map(|a| (Table::Admins, Role::Admin, &a.account_id)));
    for (table, expected, account_id) in profiles {
        match roles.get(account_id) {
            None => report.dangling(table, "account_id", account_id),
            Some(&role) if role != expected => report.violations.push(Violation::WrongRole {
                table,
                account_id: account_id.clone(),
                role,
            }),
            Some(_) => {}
        }
    }
}

fn check_prophet_tables(dataset: &Dataset, report: &mut IntegrityReport) {
    let prophets: HashSet<&ProphetId> = dataset.prophets.iter().map(|p| &p.id).collect();
    let methods: HashSet<MethodId> = dataset.horoscope_methods.iter().map(|m| m.id).collect();

    let mut offered = HashSet::new();
    for link in &dataset.prophet_methods {
        if !prophets.contains(&link.prophet_id) {
            report.dangling(Table::ProphetMethods, "prophet_id", &link.prophet_id);
        }
        if !methods.contains(&link.method_id) {
            report.dangling(Table::ProphetMethods, "method_id", link.method_id);
        }
        offered.insert((&link.prophet_id, link.method_id));
    }

    for slot in &dataset.prophet_availabilities {
        if !prophets.contains(&slot.prophet_id) {
            report.dangling(Table::ProphetAvailabilities, "prophet_id", &slot.prophet_id);
        }
    }

    for course in &dataset.courses {
        if !prophets.contains(&course.prophet_id) {
            report.dangling(Table::Courses, "prophet_id", &course.prophet_id);
        }
        if !methods.contains(&course.horoscope_method_id) {
            report.dangling(Table::Courses, "horoscope_method_id", course.horoscope_method_id);
        } else if !offered.contains(&(&course.prophet_id, course.horoscope_method_id)) {
            report.violations.push(Violation::MethodNotOffered {
                course_id: course.id.clone(),
                method_id: course.horoscope_method_id,
            });
        }
    }

    let mut combinations = HashSet::new();
    for account in &dataset.transaction_accounts {
        if !prophets.contains(&account.prophet_id) {
            report.dangling(Table::TransactionAccounts, "prophet_id", &account.prophet_id);
        }
        if !combinations.insert(account.combination()) {
            report.violations.push(Violation::DuplicatePayoutAccount {
                prophet_id: account.prophet_id.clone(),
                bank: account.bank,
                account_number: account.account_number.clone(),
            });
        }
    }
}

fn check_bookings(dataset: &Dataset, report: &mut IntegrityReport) {
    let customers: HashSet<_> = dataset.customers.iter().map(|c| &c.id).collect();
    let prophets: HashSet<_> = dataset.prophets.iter().map(|p| &p.id).collect();
    let courses: HashMap<_, _> = dataset.courses.iter().map(|c| (&c.id, c)).collect();
    let slots: HashSet<(&ProphetId, NaiveDateTime)> = dataset
        .prophet_availabilities
        .iter()
        .map(|slot| (&slot.prophet_id, slot.starts_at()))
        .collect();
    let step = Duration::minutes(i64::from(SLOT_MINUTES));

    let mut by_prophet: HashMap<&ProphetId, Vec<_>> = HashMap::new();
    for booking in &dataset.bookings {
        if !customers.contains(&booking.customer_id) {
            report.dangling(Table::Bookings, "customer_id", &booking.customer_id);
        }
        if !prophets.contains(&booking.prophet_id) {
            report.dangling(Table::Bookings, "prophet_id", &booking.prophet_id);
        }
        match courses.get(&booking.course_id) {
            None => report.dangling(Table::Bookings, "course_id", &booking.course_id),
            Some(course) if course.prophet_id != booking.prophet_id => {
                report.violations.push(Violation::ProphetMismatch(booking.id.clone()));
            }
            Some(_) => {}
        }

        let mut at = booking.start_datetime;
        let mut covered = at < booking.end_datetime;
        while covered && at < booking.end_datetime {
            covered = slots.contains(&(&booking.prophet_id, at));
            at += step;
        }
        if !covered {
            report
                .violations
                .push(Violation::OutsideAvailability(booking.id.clone()));
        }

        by_prophet.entry(&booking.prophet_id).or_default().push(booking);
    }

    for (prophet_id, mut bookings) in by_prophet {
        bookings.sort_by_key(|b| b.start_datetime);
        let mut latest: Option<(NaiveDateTime, &BookingId)> = None;
        for booking in bookings {
            if let Some((end, first)) = latest {
                if booking.start_datetime < end {
                    report.violations.push(Violation::OverlappingBookings {
                        prophet_id: prophet_id.clone(),
                        first: first.clone(),
                        second: booking.id.clone(),
                    });
                }
            }
            match latest {
                Some((end, _)) if end >= booking.end_datetime => {}
                _ => latest = Some((booking.end_datetime, &booking.id)),
            }
        }
    }

    let bookings: HashSet<_> = dataset.bookings.iter().map(|b| &b.id).collect();
    let mut paid = HashSet::new();
    for transaction in &dataset.transactions {
        if !bookings.contains(&transaction.booking_id) {
            report.dangling(Table::Transactions, "booking_id", &transaction.booking_id);
        }
        if !paid.insert(&transaction.booking_id) {
            report
                .violations
                .push(Violation::DuplicateTransaction(transaction.booking_id.clone()));
        }
    }
}

fn check_feedback(dataset: &Dataset, report: &mut IntegrityReport) {
    let customers: HashSet<_> = dataset.customers.iter().map(|c| &c.id).collect();
    let admins: HashSet<_> = dataset.admins.iter().map(|a| &a.id).collect();
    let bookings: HashMap<_, _> = dataset.bookings.iter().map(|b| (&b.id, b)).collect();

    for review in &dataset.reviews {
        if !customers.contains(&review.customer_id) {
            report.dangling(Table::Reviews, "customer_id", &review.customer_id);
        }
        match bookings.get(&review.booking_id) {
            None => report.dangling(Table::Reviews, "booking_id", &review.booking_id),
            Some(booking) => {
                if booking.status != BookingStatus::Completed {
                    report
                        .violations
                        .push(Violation::ReviewOfIncompleteBooking(review.id.clone()));
                }
                if booking.customer_id != review.customer_id {
                    report.violations.push(Violation::ReviewerMismatch(review.id.clone()));
                }
            }
        }
    }

    for item in &dataset.reports {
        if !customers.contains(&item.customer_id) {
            report.dangling(Table::Reports, "customer_id", &item.customer_id);
        }
        if let Some(admin_id) = &item.admin_id {
            if !admins.contains(admin_id) {
                report.dangling(Table::Reports, "admin_id", admin_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::context::SeedContext;
    use chrono::{TimeZone, Utc};

    fn dataset() -> Dataset {
        let config = GeneratorConfig {
            customers: 40,
            prophets: 8,
            admins: 3,
            availability_days: 10,
            dev_fixtures: true,
            ..GeneratorConfig::default()
        };
        let mut ctx = SeedContext::new(4, Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap());
        Dataset::generate(&config, &mut ctx).unwrap()
    }

    #[test]
    fn generated_dataset_is_clean() {
        let report = check(&dataset());
        assert!(report.is_clean(), "{:?}", report.violations);
    }

    #[test]
    fn detects_duplicate_email() {
        let mut data = dataset();
        data.accounts[1].email = data.accounts[0].email.clone();
        let report = check(&data);
        assert_eq!(
            report.violations,
            [Violation::DuplicateEmail(data.accounts[0].email.clone())]
        );
    }

    #[test]
    fn detects_wrong_profile_role() {
        let mut data = dataset();
        let admin_account = data.admins[0].account_id.clone();
        data.customers[0].account_id = admin_account.clone();
        let report = check(&data);
        assert!(report.violations.contains(&Violation::WrongRole {
            table: Table::Customers,
            account_id: admin_account,
            role: Role::Admin,
        }));
    }

    #[test]
    fn detects_overlapping_bookings() {
        let mut data = dataset();
        let mut copy = data.bookings[0].clone();
        copy.id = "overlapping".parse().unwrap();
        copy.start_datetime += Duration::minutes(15);
        copy.end_datetime += Duration::minutes(15);
        data.bookings.push(copy);

        let report = check(&data);
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::OverlappingBookings { second, .. } if second.as_str() == "overlapping")));
    }

    #[test]
    fn detects_booking_outside_availability() {
        let mut data = dataset();
        let booking = &mut data.bookings[0];
        booking.start_datetime -= Duration::days(400);
        booking.end_datetime -= Duration::days(400);
        let id = booking.id.clone();

        assert_eq!(check(&data).violations, [Violation::OutsideAvailability(id)]);
    }

    #[test]
    fn detects_booking_with_other_prophet() {
        let mut data = dataset();
        let other = data
            .prophets
            .iter()
            .find(|p| p.id != data.bookings[0].prophet_id)
            .map(|p| p.id.clone())
            .unwrap();
        data.bookings[0].prophet_id = other;

        let report = check(&data);
        assert!(report
            .violations
            .contains(&Violation::ProphetMismatch(data.bookings[0].id.clone())));
    }

    #[test]
    fn detects_course_method_not_offered() {
        let mut data = dataset();
        let offered: HashSet<MethodId> = data
            .prophet_methods
            .iter()
            .filter(|link| link.prophet_id == data.courses[0].prophet_id)
            .map(|link| link.method_id)
            .collect();
        let method_id = data
            .horoscope_methods
            .iter()
            .map(|m| m.id)
            .find(|id| !offered.contains(id))
            .unwrap();
        data.courses[0].horoscope_method_id = method_id;

        assert_eq!(
            check(&data).violations,
            [Violation::MethodNotOffered {
                course_id: data.courses[0].id.clone(),
                method_id,
            }]
        );
    }

    #[test]
    fn detects_duplicate_payout_account() {
        let mut data = dataset();
        let mut copy = data.transaction_accounts[0].clone();
        copy.id = "txaccount_copy".parse().unwrap();
        data.transaction_accounts.push(copy.clone());

        assert_eq!(
            check(&data).violations,
            [Violation::DuplicatePayoutAccount {
                prophet_id: copy.prophet_id,
                bank: copy.bank,
                account_number: copy.account_number,
            }]
        );
    }

    #[test]
    fn detects_dangling_booking_course() {
        let mut data = dataset();
        data.bookings[0].course_id = "missing".parse().unwrap();

        assert_eq!(
            check(&data).violations,
            [Violation::DanglingReference {
                table: Table::Bookings,
                column: "course_id",
                id: "missing".into(),
            }]
        );
    }

    #[test]
    fn detects_dangling_and_repeated_transactions() {
        let mut data = dataset();
        let repeated = data.transactions[0].booking_id.clone();
        let mut copy = data.transactions[0].clone();
        copy.id = "transaction_copy".parse().unwrap();
        data.transactions.push(copy);
        data.transactions[1].booking_id = "missing".parse().unwrap();

        let report = check(&data);
        assert!(report.violations.contains(&Violation::DuplicateTransaction(repeated)));
        assert!(report.violations.contains(&Violation::DanglingReference {
            table: Table::Transactions,
            column: "booking_id",
            id: "missing".into(),
        }));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn detects_dangling_report_admin() {
        let mut data = dataset();
        let mut item = sample_report(&data);
        item.admin_id = Some("nobody".parse().unwrap());
        data.reports.push(item);

        let report = check(&data);
        assert!(report.violations.contains(&Violation::DanglingReference {
            table: Table::Reports,
            column: "admin_id",
            id: "nobody".into(),
        }));
    }

    #[test]
    fn detects_review_of_failed_booking() {
        let mut data = dataset();
        let booking = data.bookings[0].clone();
        data.bookings[0].status = BookingStatus::Failed;
        data.reviews.push(horoscope_seed_core::Review {
            id: "review_x".parse().unwrap(),
            customer_id: booking.customer_id,
            booking_id: booking.id,
            score: 4,
            description: None,
            created_at: booking.created_at,
            updated_at: booking.created_at,
        });
        let report = check(&data);
        assert!(report
            .violations
            .contains(&Violation::ReviewOfIncompleteBooking("review_x".parse().unwrap())));
    }

    fn sample_report(data: &Dataset) -> horoscope_seed_core::Report {
        horoscope_seed_core::Report {
            id: "report_x".parse().unwrap(),
            customer_id: data.customers[0].id.clone(),
            admin_id: None,
            report_type: horoscope_seed_core::ReportType::Other,
            topic: "Website Bug".into(),
            description: "Technical issues during the session.".into(),
            report_status: horoscope_seed_core::ReportStatus::Pending,
            created_at: data.accounts[0].created_at,
            updated_at: data.accounts[0].created_at,
        }
    }
}
