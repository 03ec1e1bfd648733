//! # Cancellation Evaluation
//!
//! Decides whether a booked PT session may be cancelled right now and
//! whether the cancellation refunds. The decision table:
//!
//! | time until start        | can cancel | refund |
//! |-------------------------|-----------|--------|
//! | negative (already past) | no        | 0%     |
//! | >= refund cutoff (24h)  | yes       | 100%   |
//! | 0 .. cutoff             | yes       | 0%     |
//!
//! Boundaries are exact: a session starting in exactly `refund_cutoff`
//! hours still refunds in full, and a session starting right now is still
//! cancellable (without refund). Comparisons are made on `Duration` values,
//! not on the rounded hour count handed to the UI.

use chrono::{DateTime, Duration, Utc};
use gymbook_core::models::cancellation::CancellationDecision;
use tracing::debug;

use crate::localtime;
use crate::policy::BookingPolicy;
use gymbook_core::errors::BookingResult;

impl BookingPolicy {
    /// Evaluates the cancellation policy for a session starting at
    /// `session_start`, as of `now`.
    pub fn cancellation_decision(
        &self,
        session_start: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> CancellationDecision {
        let remaining = session_start - now;
        let hours_until_session = remaining.num_milliseconds() as f64 / 3_600_000.0;

        let decision = if remaining < Duration::zero() {
            CancellationDecision {
                can_cancel: false,
                has_refund: false,
                refund_percentage: 0,
                hours_until_session,
                warning_message: Some(
                    "This session has already passed and can no longer be cancelled.".to_string(),
                ),
            }
        } else if remaining >= self.refund_cutoff {
            CancellationDecision {
                can_cancel: true,
                has_refund: true,
                refund_percentage: 100,
                hours_until_session,
                warning_message: None,
            }
        } else {
            CancellationDecision {
                can_cancel: true,
                has_refund: false,
                refund_percentage: 0,
                hours_until_session,
                warning_message: Some(format!(
                    "Cancelling less than {} hours before the session forfeits the refund.",
                    self.refund_cutoff.num_hours()
                )),
            }
        };

        debug!(
            can_cancel = decision.can_cancel,
            refund = decision.refund_percentage,
            hours_until_session,
            "evaluated cancellation policy"
        );

        decision
    }

    /// `cancellation_decision` against the system clock.
    pub fn cancellation_decision_now(&self, session_start: DateTime<Utc>) -> CancellationDecision {
        self.cancellation_decision(session_start, Utc::now())
    }

    /// Evaluates a raw backend timestamp.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Parse` if the timestamp is malformed. The
    /// caller must not build a cancellation dialog from a failed parse;
    /// there is no default decision.
    pub fn cancellation_decision_raw(
        &self,
        session_start: &str,
        now: DateTime<Utc>,
    ) -> BookingResult<CancellationDecision> {
        let start = localtime::parse_timestamp(session_start)?;
        Ok(self.cancellation_decision(start, now))
    }
}
