use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::Slot;

/// A confirmed PT booking as fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedSession {
    pub id: Uuid,
    pub slot: Slot,
    pub trainer_name: String,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Upcoming,
    InProgress,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Derives the time-dependent status of a non-cancelled session.
    /// Cancelled is sticky and never re-derived from the clock.
    pub fn at(slot: &Slot, now: DateTime<Utc>) -> Self {
        if now < slot.start_time {
            Self::Upcoming
        } else if now < slot.end_time {
            Self::InProgress
        } else {
            Self::Completed
        }
    }
}

impl BookedSession {
    /// Refreshes the derived status against the clock, leaving cancelled
    /// sessions untouched.
    pub fn with_status_at(mut self, now: DateTime<Utc>) -> Self {
        if self.status != SessionStatus::Cancelled {
            self.status = SessionStatus::at(&self.slot, now);
        }
        self
    }
}
