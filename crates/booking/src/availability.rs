//! # Availability Filtering
//!
//! Decides which of a trainer's published slots the booking screen may offer
//! for a member-selected date. A slot is offerable only when both hold:
//!
//! 1. Its start time falls on the selected calendar day *in the display
//!    offset* (UTC+7 by default). The comparison is never done on the UTC
//!    calendar day; an evening UTC start belongs to the next local day.
//! 2. Its start time is strictly after `now + lead_time`, so trainers are
//!    never surprised by immediate bookings.
//!
//! The filter is pure: input order is preserved, nothing is mutated, and
//! `now` is an explicit argument so tests can pin it.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use gymbook_core::models::slot::Slot;
use tracing::debug;

use crate::localtime;
use crate::policy::BookingPolicy;

impl BookingPolicy {
    /// Returns the slots offerable for `selected_date` as of `now`.
    ///
    /// The lead-time boundary is exclusive: a slot starting exactly at
    /// `now + lead_time` is not offerable.
    pub fn available_slots(
        &self,
        slots: &[Slot],
        selected_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<Slot> {
        let earliest_start = now + self.lead_time;

        let available: Vec<Slot> = slots
            .iter()
            .filter(|slot| {
                localtime::local_date(slot.start_time, self.display_offset) == selected_date
                    && slot.start_time > earliest_start
            })
            .cloned()
            .collect();

        debug!(
            published = slots.len(),
            offerable = available.len(),
            %selected_date,
            "filtered trainer schedule"
        );

        available
    }

    /// `available_slots` against the system clock.
    pub fn available_slots_now(&self, slots: &[Slot], selected_date: NaiveDate) -> Vec<Slot> {
        self.available_slots(slots, selected_date, Utc::now())
    }

    /// Groups a trainer's schedule by local calendar day for the week view.
    /// Days come out sorted; slots keep their input order within a day.
    pub fn group_by_day(&self, slots: &[Slot]) -> BTreeMap<NaiveDate, Vec<Slot>> {
        let mut days: BTreeMap<NaiveDate, Vec<Slot>> = BTreeMap::new();
        for slot in slots {
            let day = localtime::local_date(slot.start_time, self.display_offset);
            days.entry(day).or_default().push(slot.clone());
        }
        days
    }
}
