//! # Booking Policy
//!
//! The knobs shared by availability filtering and cancellation evaluation.
//! Defaults match the production policy: members book at least 5 hours in
//! advance, and a cancellation made 24 hours or more before the session
//! start refunds in full.

use chrono::{Duration, FixedOffset};

use crate::localtime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Minimum advance-booking window. A slot starting at or before
    /// `now + lead_time` is not offerable.
    pub lead_time: Duration,

    /// Refund cutoff before session start. At or beyond the cutoff the
    /// refund is 100%, inside it 0%; the policy is binary, never prorated.
    pub refund_cutoff: Duration,

    /// Fixed offset used for calendar-day comparison and display.
    pub display_offset: FixedOffset,
}

impl BookingPolicy {
    pub fn new(lead_time: Duration, refund_cutoff: Duration, display_offset: FixedOffset) -> Self {
        Self {
            lead_time,
            refund_cutoff,
            display_offset,
        }
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            lead_time: Duration::hours(5),
            refund_cutoff: Duration::hours(24),
            // 7 hours east is always within chrono's valid offset range
            display_offset: FixedOffset::east_opt(localtime::VIETNAM_OFFSET_HOURS * 3600)
                .expect("constant offset is in range"),
        }
    }
}
