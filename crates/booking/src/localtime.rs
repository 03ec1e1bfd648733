//! # Local-Time Normalization
//!
//! The backend stores and transmits instants in UTC; the client renders
//! everything in a single fixed display offset (UTC+7, Vietnam). This module
//! owns the boundary between the two: parsing the backend's ISO-8601 strings
//! into `DateTime<Utc>`, and shifting instants into the display offset before
//! any calendar-date comparison or formatted output.
//!
//! The shift is applied explicitly. Comparing the calendar day of a raw UTC
//! instant against a locally selected date misfiles every slot that starts
//! between 17:00 and 24:00 UTC, so no code outside this module should call
//! `.date_naive()` on a UTC value.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use gymbook_core::errors::{BookingError, BookingResult};
use gymbook_core::models::slot::{Slot, SlotRecord};
use uuid::Uuid;

/// Default display offset, in hours east of UTC.
pub const VIETNAM_OFFSET_HOURS: i32 = 7;

/// Builds a fixed display offset from whole hours east of UTC.
///
/// # Errors
///
/// Returns `BookingError::Validation` if the offset is outside the valid
/// range (-23..=23 hours).
pub fn display_offset(hours: i32) -> BookingResult<FixedOffset> {
    FixedOffset::east_opt(hours * 3600).ok_or_else(|| {
        BookingError::Validation(format!("UTC offset out of range: {} hours", hours))
    })
}

/// Parses a backend timestamp into a UTC instant.
///
/// Accepts full RFC 3339 (`2024-06-10T08:00:00Z`, `2024-06-10T15:00:00+07:00`)
/// as well as the bare `2024-06-10T08:00:00` form the backend emits on some
/// endpoints, which is read as UTC.
///
/// # Errors
///
/// Returns `BookingError::Parse` carrying the offending input. Never panics;
/// callers must surface the failure rather than fall back to a default
/// instant.
pub fn parse_timestamp(raw: &str) -> BookingResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| BookingError::Parse(raw.to_string()))
}

/// Shifts a UTC instant into the display offset. Same instant, different
/// wall clock.
pub fn to_local(instant: DateTime<Utc>, offset: FixedOffset) -> DateTime<FixedOffset> {
    instant.with_timezone(&offset)
}

/// Calendar day of an instant under the display offset.
pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    to_local(instant, offset).date_naive()
}

/// Formats an instant as `HH:MM` local wall-clock time.
pub fn format_time(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    to_local(instant, offset).format("%H:%M").to_string()
}

/// Formats an instant as `DD/MM/YYYY` under the display offset.
pub fn format_date(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    to_local(instant, offset).format("%d/%m/%Y").to_string()
}

/// English weekday name of an instant under the display offset.
pub fn day_name(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    to_local(instant, offset).format("%A").to_string()
}

/// Decodes a wire slot record into a validated `Slot`.
///
/// # Errors
///
/// * `BookingError::Validation` - a UUID field is malformed, or the slot
///   ends at or before it starts
/// * `BookingError::Parse` - a timestamp is not valid ISO-8601
pub fn decode_slot(record: &SlotRecord) -> BookingResult<Slot> {
    let id = Uuid::parse_str(&record.id)
        .map_err(|_| BookingError::Validation(format!("Invalid slot id: {}", record.id)))?;
    let trainer_id = Uuid::parse_str(&record.trainer_id).map_err(|_| {
        BookingError::Validation(format!("Invalid trainer id: {}", record.trainer_id))
    })?;
    let start_time = parse_timestamp(&record.start_time)?;
    let end_time = parse_timestamp(&record.end_time)?;
    Slot::new(id, trainer_id, start_time, end_time)
}

/// Decodes a full schedule, failing on the first malformed record.
///
/// A malformed slot is an error, not a silent drop: skipping it would show
/// the member an availability list missing windows the trainer published.
pub fn decode_schedule(records: &[SlotRecord]) -> BookingResult<Vec<Slot>> {
    records.iter().map(decode_slot).collect()
}
