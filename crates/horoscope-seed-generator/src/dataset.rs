//! The complete in-memory dataset and its generation flow.

use std::collections::BTreeMap;

use horoscope_seed_core::{
    Account, Admin, Booking, BookingStatus, Course, Customer, HoroscopeMethod, Prophet,
    ProphetAvailability, ProphetMethod, Report, Review, Table, Transaction, TransactionAccount,
    UserDetail,
};
use horoscope_seed_store::{StoreError, TableSink};

use crate::config::GeneratorConfig;
use crate::context::SeedContext;
use crate::error::Result;
use crate::fixtures::{DevActivity, DevFixtures};
use crate::generate::{
    generate_accounts, generate_admins, generate_bookings, generate_courses, generate_customers,
    generate_horoscope_methods, generate_prophet_availabilities, generate_prophet_methods,
    generate_prophets, generate_reports, generate_reviews, generate_transaction_accounts,
    generate_transactions, generate_user_details, AccountRegistry, SlotIndex,
};

/// Every table of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Login accounts.
    pub accounts: Vec<Account>,
    /// Method catalog.
    pub horoscope_methods: Vec<HoroscopeMethod>,
    /// Personal details, one per account.
    pub user_details: Vec<UserDetail>,
    /// Customer profiles.
    pub customers: Vec<Customer>,
    /// Prophet profiles.
    pub prophets: Vec<Prophet>,
    /// Admin profiles.
    pub admins: Vec<Admin>,
    /// Methods each prophet offers.
    pub prophet_methods: Vec<ProphetMethod>,
    /// Availability slots.
    pub prophet_availabilities: Vec<ProphetAvailability>,
    /// Courses.
    pub courses: Vec<Course>,
    /// Bookings.
    pub bookings: Vec<Booking>,
    /// One transaction per booking.
    pub transactions: Vec<Transaction>,
    /// Prophet payout accounts.
    pub transaction_accounts: Vec<TransactionAccount>,
    /// Reviews of completed bookings.
    pub reviews: Vec<Review>,
    /// Customer reports.
    pub reports: Vec<Report>,
}

/// Rows written per table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Row count keyed by table.
    pub rows: BTreeMap<Table, usize>,
}

impl WriteReport {
    /// Total rows across all tables.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.values().sum()
    }
}

fn merged<T>(mut fixed: Vec<T>, generated: Vec<T>) -> Vec<T> {
    fixed.extend(generated);
    fixed
}

impl Dataset {
    /// Generate a dataset.
    ///
    /// Fixture records come first in every table they touch. Prophet-owned
    /// tables are generated for random prophets only. The fixed dev bookings
    /// are placed before the random ones, which then draw on fixture and
    /// random records alike; random transactions and reviews cover random
    /// bookings only.
    ///
    /// # Errors
    ///
    /// Returns an error if the development fixtures cannot be built.
    pub fn generate(config: &GeneratorConfig, ctx: &mut SeedContext) -> Result<Self> {
        let horoscope_methods = generate_horoscope_methods();
        let fixtures = if config.dev_fixtures {
            DevFixtures::build(ctx, &horoscope_methods, config.availability_days)?
        } else {
            DevFixtures::default()
        };

        let mut registry = AccountRegistry::new();
        for account in &fixtures.accounts {
            registry.reserve(account);
        }
        let accounts = generate_accounts(
            ctx,
            &mut registry,
            config.customers,
            config.prophets,
            config.admins,
        );
        let user_details = generate_user_details(ctx, &accounts);
        let customers = generate_customers(ctx, &accounts);
        let prophets = generate_prophets(ctx, &accounts);
        let admins = generate_admins(ctx, &accounts);
        tracing::debug!(accounts = accounts.len(), "Generated accounts and profiles");

        let prophet_methods = generate_prophet_methods(ctx, &prophets, &horoscope_methods);
        let prophet_availabilities =
            generate_prophet_availabilities(ctx, &prophets, config.availability_days);
        let courses = generate_courses(ctx, &prophets, &prophet_methods, &horoscope_methods);
        let transaction_accounts = generate_transaction_accounts(ctx, &prophets);

        let customers = merged(fixtures.customers, customers);
        let prophets = merged(fixtures.prophets, prophets);
        let admins = merged(fixtures.admins, admins);
        let courses = merged(fixtures.courses, courses);
        let prophet_availabilities = merged(fixtures.availabilities, prophet_availabilities);

        let mut index = SlotIndex::new(&prophet_availabilities);
        let activity = if config.dev_fixtures {
            DevActivity::place(ctx, &mut index, &customers, &prophets, &courses)?
        } else {
            DevActivity::default()
        };
        let bookings = generate_bookings(ctx, &customers, &courses, &mut index);
        let transactions = generate_transactions(ctx, &bookings);
        let reviews = generate_reviews(ctx, &bookings);
        let reports = generate_reports(ctx, &customers, &admins);
        tracing::debug!(
            bookings = bookings.len(),
            dev_bookings = activity.bookings.len(),
            "Generated bookings and feedback"
        );

        Ok(Self {
            accounts: merged(fixtures.accounts, accounts),
            horoscope_methods,
            user_details: merged(fixtures.user_details, user_details),
            customers,
            prophets,
            admins,
            prophet_methods: merged(fixtures.prophet_methods, prophet_methods),
            prophet_availabilities,
            courses,
            bookings: merged(activity.bookings, bookings),
            transactions: merged(activity.transactions, transactions),
            transaction_accounts: merged(fixtures.transaction_accounts, transaction_accounts),
            reviews: merged(activity.reviews, reviews),
            reports: merged(activity.reports, reports),
        })
    }

    /// Rows held for a table.
    #[must_use]
    pub fn row_count(&self, table: Table) -> usize {
        match table {
            Table::Accounts => self.accounts.len(),
            Table::HoroscopeMethods => self.horoscope_methods.len(),
            Table::UserDetails => self.user_details.len(),
            Table::Customers => self.customers.len(),
            Table::Prophets => self.prophets.len(),
            Table::Admins => self.admins.len(),
            Table::ProphetMethods => self.prophet_methods.len(),
            Table::ProphetAvailabilities => self.prophet_availabilities.len(),
            Table::Courses => self.courses.len(),
            Table::Bookings => self.bookings.len(),
            Table::Transactions => self.transactions.len(),
            Table::TransactionAccounts => self.transaction_accounts.len(),
            Table::Reviews => self.reviews.len(),
            Table::Reports => self.reports.len(),
        }
    }

    /// Active courses.
    pub fn active_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|course| course.is_active)
    }

    /// Completed bookings.
    pub fn completed_bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.status == BookingStatus::Completed)
    }

    /// Write every table to `sink` in import order.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink.
    pub fn write_to<S: TableSink>(&self, sink: &mut S) -> std::result::Result<WriteReport, StoreError> {
        let mut report = WriteReport::default();
        for table in Table::ALL {
            let written = match table {
                Table::Accounts => sink.write_table(&self.accounts)?,
                Table::HoroscopeMethods => sink.write_table(&self.horoscope_methods)?,
                Table::UserDetails => sink.write_table(&self.user_details)?,
                Table::Customers => sink.write_table(&self.customers)?,
                Table::Prophets => sink.write_table(&self.prophets)?,
                Table::Admins => sink.write_table(&self.admins)?,
                Table::ProphetMethods => sink.write_table(&self.prophet_methods)?,
                Table::ProphetAvailabilities => sink.write_table(&self.prophet_availabilities)?,
                Table::Courses => sink.write_table(&self.courses)?,
                Table::Bookings => sink.write_table(&self.bookings)?,
                Table::Transactions => sink.write_table(&self.transactions)?,
                Table::TransactionAccounts => sink.write_table(&self.transaction_accounts)?,
                Table::Reviews => sink.write_table(&self.reviews)?,
                Table::Reports => sink.write_table(&self.reports)?,
            };
            report.rows.insert(table, written);
        }
        Ok(report)
    }
}
