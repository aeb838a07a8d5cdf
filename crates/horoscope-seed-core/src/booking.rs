//! Bookings and the records that depend on them.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{Record, Table};
use crate::{BookingId, CourseId, CustomerId, ProphetId, ReviewId, TransactionId};

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Session is upcoming.
    Scheduled,
    /// Session took place.
    Completed,
    /// Booking failed (payment or no-show).
    Failed,
}

impl BookingStatus {
    /// All variants.
    pub const ALL: [Self; 3] = [Self::Scheduled, Self::Completed, Self::Failed];
}

/// State of the payment behind a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Payment pending.
    Processing,
    /// Payment settled.
    Completed,
    /// Payment failed.
    Failed,
}

/// A customer's booking of a course in a prophet's availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID.
    pub id: BookingId,

    /// The booking customer.
    pub customer_id: CustomerId,

    /// The booked course.
    pub course_id: CourseId,

    /// The course's prophet.
    pub prophet_id: ProphetId,

    /// Session start (start of the first consumed slot).
    pub start_datetime: NaiveDateTime,

    /// Session end (end of the last consumed slot).
    pub end_datetime: NaiveDateTime,

    /// Booking status.
    pub status: BookingStatus,

    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the two bookings share any instant. Touching ends do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_datetime < other.end_datetime && other.start_datetime < self.end_datetime
    }
}

impl Record for Booking {
    const TABLE: Table = Table::Bookings;
}

/// Payment transaction for a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,

    /// The paid booking.
    pub booking_id: BookingId,

    /// Payment status.
    pub status: TransactionStatus,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for Transaction {
    const TABLE: Table = Table::Transactions;
}

/// A customer's review of a completed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review ID.
    pub id: ReviewId,

    /// The reviewing customer.
    pub customer_id: CustomerId,

    /// The reviewed booking.
    pub booking_id: BookingId,

    /// Score from 1 to 5.
    pub score: u8,

    /// Free text, absent when the customer left none.
    pub description: Option<String>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for Review {
    const TABLE: Table = Table::Reviews;
}
