//! Table generators.
//!
//! Each generator builds one table (or a closely related pair) from its parents
//! and the shared [`SeedContext`](crate::SeedContext). Collision avoidance is
//! local to a generator and bounded by a fixed attempt budget.

pub mod accounts;
pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod feedback;
pub mod payments;
pub mod profiles;

pub use accounts::{generate_accounts, generate_user_details, AccountRegistry};
pub use availability::{expand_window, generate_prophet_availabilities};
pub use bookings::{generate_bookings, SlotIndex};
pub use catalog::{generate_courses, generate_horoscope_methods, generate_prophet_methods};
pub use feedback::{generate_reports, generate_reviews};
pub use payments::{generate_transaction_accounts, generate_transactions};
pub use profiles::{generate_admins, generate_customers, generate_prophets};
