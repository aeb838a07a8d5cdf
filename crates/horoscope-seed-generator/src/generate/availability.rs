//! Prophet availability, stored as consecutive 15-minute slot rows.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use horoscope_seed_core::{Prophet, ProphetAvailability, ProphetId, SLOT_MINUTES};
use rand::Rng;

use crate::context::SeedContext;

// ============================================================================
// Constants
// ============================================================================

/// Earliest hour a generated window may start.
pub const DAY_START_HOUR: u32 = 7;

/// Hour by which every generated window has ended.
pub const DAY_END_HOUR: u32 = 23;

/// Slots between [`DAY_START_HOUR`] and [`DAY_END_HOUR`].
pub const SLOTS_PER_DAY: u32 = (DAY_END_HOUR - DAY_START_HOUR) * 60 / SLOT_MINUTES;

/// Shortest generated window, in slots.
pub const MIN_WINDOW_SLOTS: u32 = 4;

/// Longest generated window, in slots.
pub const MAX_WINDOW_SLOTS: u32 = 12;

/// Placement attempts per window before it is skipped.
pub const WINDOW_ATTEMPTS: usize = 20;

fn time_at_minute(minute: u32) -> NaiveTime {
    NaiveTime::default() + Duration::minutes(i64::from(minute))
}

/// Split `[start, end)` on `date` into slot rows. A trailing partial slot is dropped.
#[must_use]
pub fn expand_window(
    prophet_id: &ProphetId,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    now: DateTime<Utc>,
) -> Vec<ProphetAvailability> {
    let first = start.num_seconds_from_midnight() / 60;
    let last = end.num_seconds_from_midnight() / 60;
    (first..last)
        .step_by(SLOT_MINUTES as usize)
        .filter(|minute| minute + SLOT_MINUTES <= last)
        .map(|minute| ProphetAvailability {
            prophet_id: prophet_id.clone(),
            date,
            start_time: time_at_minute(minute),
            end_time: time_at_minute(minute + SLOT_MINUTES),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

/// Non-overlapping `(start, len)` slot ranges for one day, sorted by start.
fn place_windows(ctx: &mut SeedContext) -> Vec<(u32, u32)> {
    let wanted = ctx.rng().gen_range(1..=3);
    let mut placed: Vec<(u32, u32)> = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        for _ in 0..WINDOW_ATTEMPTS {
            let len = ctx.rng().gen_range(MIN_WINDOW_SLOTS..=MAX_WINDOW_SLOTS);
            let start = ctx.rng().gen_range(0..=SLOTS_PER_DAY - len);
            let clashes = placed
                .iter()
                .any(|&(s, l)| start < s + l && s < start + len);
            if !clashes {
                placed.push((start, len));
                break;
            }
        }
    }
    placed.sort_unstable();
    placed
}

/// Availability for each prophet over `days` days from the reference date.
///
/// Each prophet works every first, second or third day. A working day gets
/// one to three windows, each expanded into slot rows.
pub fn generate_prophet_availabilities(
    ctx: &mut SeedContext,
    prophets: &[Prophet],
    days: u32,
) -> Vec<ProphetAvailability> {
    let now = ctx.now();
    let today = ctx.today();
    let mut rows = Vec::new();
    for prophet in prophets {
        let step = ctx.rng().gen_range(1..=3);
        for offset in (0..days).step_by(step) {
            let date = today + Duration::days(i64::from(offset));
            for (start, len) in place_windows(ctx) {
                let open = DAY_START_HOUR * 60 + start * SLOT_MINUTES;
                let close = open + len * SLOT_MINUTES;
                rows.extend(expand_window(
                    &prophet.id,
                    date,
                    time_at_minute(open),
                    time_at_minute(close),
                    now,
                ));
            }
        }
    }
    rows
}
