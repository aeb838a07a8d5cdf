//! Reviews of completed bookings and customer reports to admins.

use horoscope_seed_core::{
    Admin, Booking, BookingStatus, Customer, Report, ReportId, ReportStatus, ReportType, Review,
    ReviewId,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::context::SeedContext;
use crate::pools::{REPORT_DESCRIPTIONS, REPORT_TOPICS, REVIEW_DESCRIPTIONS};

/// Share of completed bookings that get a review.
pub const REVIEW_RATE: f64 = 0.8;

/// Share of reviews that carry text.
pub const REVIEW_TEXT_RATE: f64 = 0.7;

/// Share of customers that file reports.
pub const REPORTING_RATE: f64 = 0.2;

/// Share of reports already picked up by an admin.
pub const ASSIGNED_RATE: f64 = 0.7;

/// Reviews for a share of completed bookings, written by the booking's customer.
pub fn generate_reviews(ctx: &mut SeedContext, bookings: &[Booking]) -> Vec<Review> {
    let now = ctx.now();
    let mut reviews = Vec::new();
    for booking in bookings.iter().filter(|b| b.status == BookingStatus::Completed) {
        if !ctx.chance(REVIEW_RATE) {
            continue;
        }
        let score = ctx.rng().gen_range(3..=5);
        let description = if ctx.chance(REVIEW_TEXT_RATE) {
            Some(ctx.pick(&REVIEW_DESCRIPTIONS)).filter(|text| !text.is_empty()).map(str::to_string)
        } else {
            None
        };
        reviews.push(Review {
            id: ReviewId::from_random_bytes(ctx.id_bytes()),
            customer_id: booking.customer_id.clone(),
            booking_id: booking.id.clone(),
            score,
            description,
            created_at: now,
            updated_at: now,
        });
    }
    reviews
}

/// One or two reports from a share of customers.
///
/// Assigned reports are DISCARD or DONE; the rest are PENDING with no admin.
/// Without admins every report stays unassigned.
pub fn generate_reports(ctx: &mut SeedContext, customers: &[Customer], admins: &[Admin]) -> Vec<Report> {
    let now = ctx.now();
    let mut reports = Vec::new();
    for customer in customers {
        if !ctx.chance(REPORTING_RATE) {
            continue;
        }
        let count = ctx.rng().gen_range(1..=2);
        for _ in 0..count {
            let admin = if ctx.chance(ASSIGNED_RATE) {
                admins.choose(ctx.rng())
            } else {
                None
            };
            let report_status = match admin {
                Some(_) => ctx.pick(&ReportStatus::HANDLED),
                None => ReportStatus::Pending,
            };
            reports.push(Report {
                id: ReportId::from_random_bytes(ctx.id_bytes()),
                customer_id: customer.id.clone(),
                admin_id: admin.map(|a| a.id.clone()),
                report_type: ctx.pick(&ReportType::ALL),
                topic: ctx.pick(&REPORT_TOPICS).to_string(),
                description: ctx.pick(&REPORT_DESCRIPTIONS).to_string(),
                report_status,
                created_at: now,
                updated_at: now,
            });
        }
    }
    reports
}
