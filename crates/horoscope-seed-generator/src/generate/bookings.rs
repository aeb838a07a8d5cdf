//! Bookings placed on free runs of availability slots.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use horoscope_seed_core::{
    Booking, BookingId, BookingStatus, Course, Customer, ProphetAvailability, ProphetId,
    SLOT_MINUTES,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::context::SeedContext;

/// Attempts to place one booking before giving up on it.
pub const BOOKING_ATTEMPTS: usize = 50;

fn slot_length() -> Duration {
    Duration::minutes(i64::from(SLOT_MINUTES))
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    start: NaiveDateTime,
    booked: bool,
}

/// Per-prophet availability slots, sorted by start, with their booked state.
#[derive(Debug, Default)]
pub struct SlotIndex {
    slots: HashMap<ProphetId, Vec<Slot>>,
}

impl SlotIndex {
    /// Index availability rows. Duplicate slots collapse into one.
    #[must_use]
    pub fn new(availabilities: &[ProphetAvailability]) -> Self {
        let mut slots: HashMap<ProphetId, Vec<Slot>> = HashMap::new();
        for row in availabilities {
            slots.entry(row.prophet_id.clone()).or_default().push(Slot {
                start: row.starts_at(),
                booked: false,
            });
        }
        for list in slots.values_mut() {
            list.sort_unstable_by_key(|slot| slot.start);
            list.dedup_by_key(|slot| slot.start);
        }
        Self { slots }
    }

    /// Free slots left for a prophet.
    #[must_use]
    pub fn free_slots(&self, prophet: &ProphetId) -> usize {
        self.slots
            .get(prophet)
            .map_or(0, |list| list.iter().filter(|slot| !slot.booked).count())
    }

    /// Book `needed` consecutive free slots of `prophet` at a random position.
    ///
    /// Returns the booked `(start, end)` range, or `None` if no run fits.
    pub fn reserve(
        &mut self,
        ctx: &mut SeedContext,
        prophet: &ProphetId,
        needed: usize,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let list = self.slots.get_mut(prophet)?;
        if needed == 0 || list.len() < needed {
            return None;
        }

        let mut starts: Vec<usize> = (0..=list.len() - needed).collect();
        starts.shuffle(ctx.rng());
        let first = starts.into_iter().find(|&i| run_is_free(list, i, needed))?;
        Some(book_run(list, first, needed))
    }

    /// Book the earliest free run of `needed` slots starting at or after
    /// `not_before`, else the earliest free run at all.
    ///
    /// Uses no randomness.
    pub fn reserve_from(
        &mut self,
        prophet: &ProphetId,
        not_before: NaiveDateTime,
        needed: usize,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let list = self.slots.get_mut(prophet)?;
        if needed == 0 || list.len() < needed {
            return None;
        }

        let split = list.partition_point(|slot| slot.start < not_before);
        let last = list.len() - needed;
        let first = (split..=last)
            .chain(0..split.min(last + 1))
            .find(|&i| run_is_free(list, i, needed))?;
        Some(book_run(list, first, needed))
    }
}

fn run_is_free(list: &[Slot], first: usize, needed: usize) -> bool {
    let step = slot_length();
    let run = &list[first..first + needed];
    run.iter().all(|slot| !slot.booked)
        && run.windows(2).all(|pair| pair[1].start - pair[0].start == step)
}

fn book_run(list: &mut [Slot], first: usize, needed: usize) -> (NaiveDateTime, NaiveDateTime) {
    let run = &mut list[first..first + needed];
    for slot in run.iter_mut() {
        slot.booked = true;
    }
    (run[0].start, run[needed - 1].start + slot_length())
}

/// Zero to two bookings per customer on active courses.
///
/// Each booking takes a random active course and reserves the course's
/// duration in its prophet's slots. A booking that finds no room within
/// [`BOOKING_ATTEMPTS`] is dropped. Slots already booked in `index` stay taken.
pub fn generate_bookings(
    ctx: &mut SeedContext,
    customers: &[Customer],
    courses: &[Course],
    index: &mut SlotIndex,
) -> Vec<Booking> {
    let active: Vec<&Course> = courses.iter().filter(|course| course.is_active).collect();
    if active.is_empty() {
        tracing::debug!("No active courses, skipping bookings");
        return Vec::new();
    }

    let now = ctx.now();
    let mut bookings = Vec::new();
    for customer in customers {
        let wanted = ctx.rng().gen_range(0..=2);
        for _ in 0..wanted {
            let placed = (0..BOOKING_ATTEMPTS).find_map(|_| {
                let course = *active.choose(ctx.rng())?;
                let needed = course.slots_needed()?;
                if index.free_slots(&course.prophet_id) < needed {
                    return None;
                }
                let (start, end) = index.reserve(ctx, &course.prophet_id, needed)?;
                Some(Booking {
                    id: BookingId::from_random_bytes(ctx.id_bytes()),
                    customer_id: customer.id.clone(),
                    course_id: course.id.clone(),
                    prophet_id: course.prophet_id.clone(),
                    start_datetime: start,
                    end_datetime: end,
                    status: ctx.pick(&BookingStatus::ALL),
                    created_at: now,
                })
            });
            match placed {
                Some(booking) => bookings.push(booking),
                None => tracing::debug!(customer = %customer.id, "No free slots for booking"),
            }
        }
    }
    bookings
}
