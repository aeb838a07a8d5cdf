//! Customer reports handled by admins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{Record, Table};
use crate::{AdminId, CustomerId, ReportId};

/// What a report is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ReportType {
    CourseIssue,
    ProphetIssue,
    PaymentIssue,
    WebsiteIssue,
    Other,
}

impl ReportType {
    /// All variants.
    pub const ALL: [Self; 5] = [
        Self::CourseIssue,
        Self::ProphetIssue,
        Self::PaymentIssue,
        Self::WebsiteIssue,
        Self::Other,
    ];
}

/// Handling state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Not yet picked up by an admin.
    Pending,
    /// Dismissed by an admin.
    Discard,
    /// Resolved by an admin.
    Done,
}

impl ReportStatus {
    /// Statuses an assigned admin can leave a report in.
    pub const HANDLED: [Self; 2] = [Self::Discard, Self::Done];
}

/// A customer's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report ID.
    pub id: ReportId,

    /// The reporting customer.
    pub customer_id: CustomerId,

    /// The handling admin, if assigned.
    pub admin_id: Option<AdminId>,

    /// Category.
    pub report_type: ReportType,

    /// Short subject line.
    pub topic: String,

    /// Details.
    pub description: String,

    /// Handling state.
    pub report_status: ReportStatus,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for Report {
    const TABLE: Table = Table::Reports;
}
