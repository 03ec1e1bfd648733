use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Raw slot shape as delivered by the "list trainers with schedule"
/// endpoint. Timestamps arrive as ISO-8601 strings and must be parsed and
/// validated before the slot enters the booking engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRecord {
    pub id: String,
    pub trainer_id: String,
    pub start_time: String,
    pub end_time: String,
}

/// A validated trainer time window. Invariant: `end_time > start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub trainer_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Slot {
    pub fn new(
        id: Uuid,
        trainer_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BookingResult<Self> {
        if end_time <= start_time {
            return Err(BookingError::Validation(format!(
                "Slot {} ends at or before it starts ({} >= {})",
                id, start_time, end_time
            )));
        }
        Ok(Self {
            id,
            trainer_id,
            start_time,
            end_time,
        })
    }
}
