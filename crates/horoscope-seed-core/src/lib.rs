//! Core types for the horoscope platform seed data generator.
//!
//! This crate provides the record types that mirror the platform's relational schema:
//!
//! - **Identifiers**: `AccountId`, `CustomerId`, `ProphetId`, `BookingId`, `MethodId`, ...
//! - **Accounts**: `Account`, `UserDetail`, `Customer`, `Prophet`, `Admin`
//! - **Catalog**: `HoroscopeMethod`, `ProphetMethod`, `ProphetAvailability`, `Course`
//! - **Bookings**: `Booking`, `Transaction`, `Review`
//! - **Payouts**: `TransactionAccount`, `Bank`
//! - **Reports**: `Report`, `ReportType`, `ReportStatus`
//!
//! # Tables
//!
//! Every record type implements [`Record`], which ties it to exactly one [`Table`].
//! Column order in the written output is the field order of the record struct.
//!
//! # Money
//!
//! Course prices are stored as integer satang (1/100 baht) in [`Price`] and
//! rendered with two fraction digits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod booking;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod payout;
pub mod report;
pub mod table;

pub use account::{Account, Admin, Customer, Prophet, Role, Sex, UserDetail, ZodiacSign};
pub use booking::{Booking, BookingStatus, Review, Transaction, TransactionStatus};
pub use catalog::{
    Course, HoroscopeMethod, HoroscopeSector, Price, ProphetAvailability, ProphetMethod,
    SLOT_MINUTES,
};
pub use error::{Result, SeedError};
pub use ids::{
    AccountId, AdminId, BookingId, CourseId, CustomerId, IdError, MethodId, ProphetId, ReportId,
    ReviewId, TransactionAccountId, TransactionId, SHORT_ID_LEN,
};
pub use payout::{Bank, TransactionAccount};
pub use report::{Report, ReportStatus, ReportType};
pub use table::{Record, Table};
