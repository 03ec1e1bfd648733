use chrono::{DateTime, TimeZone, Utc};
use gymbook_core::errors::BookingError;
use gymbook_core::models::{
    cancellation::CancellationDecision,
    session::{BookedSession, SessionStatus},
    slot::{Slot, SlotRecord},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

fn sample_slot(start: DateTime<Utc>, duration_hours: i64) -> Slot {
    Slot::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        start,
        start + chrono::Duration::hours(duration_hours),
    )
    .expect("sample slot is valid")
}

#[test]
fn test_slot_serialization() {
    let start_time = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
    let slot = sample_slot(start_time, 1);

    let json = to_string(&slot).expect("Failed to serialize slot");
    let deserialized: Slot = from_str(&json).expect("Failed to deserialize slot");

    assert_eq!(deserialized, slot);
}

#[test]
fn test_slot_record_deserialization() {
    let json = r#"{
        "id": "7f2c4a1e-9b3d-4e5f-8a6b-1c2d3e4f5a6b",
        "trainer_id": "0a1b2c3d-4e5f-6a7b-8c9d-0e1f2a3b4c5d",
        "start_time": "2024-06-10T08:00:00Z",
        "end_time": "2024-06-10T09:00:00Z"
    }"#;

    let record: SlotRecord = from_str(json).expect("Failed to deserialize slot record");

    assert_eq!(record.id, "7f2c4a1e-9b3d-4e5f-8a6b-1c2d3e4f5a6b");
    assert_eq!(record.start_time, "2024-06-10T08:00:00Z");
    assert_eq!(record.end_time, "2024-06-10T09:00:00Z");
}

#[test]
fn test_slot_rejects_inverted_window() {
    let start_time = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
    let end_time = start_time - chrono::Duration::hours(1);

    let result = Slot::new(Uuid::new_v4(), Uuid::new_v4(), start_time, end_time);

    assert!(matches!(result, Err(BookingError::Validation(_))));
}

#[test]
fn test_slot_rejects_zero_length_window() {
    let start_time = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();

    let result = Slot::new(Uuid::new_v4(), Uuid::new_v4(), start_time, start_time);

    assert!(matches!(result, Err(BookingError::Validation(_))));
}

#[rstest]
#[case::before_start(-1, SessionStatus::Upcoming)]
#[case::during(1, SessionStatus::InProgress)]
#[case::after_end(3, SessionStatus::Completed)]
fn test_session_status_at(#[case] hours_after_start: i64, #[case] expected: SessionStatus) {
    let start_time = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
    let slot = sample_slot(start_time, 2);
    let now = start_time + chrono::Duration::hours(hours_after_start);

    assert_eq!(SessionStatus::at(&slot, now), expected);
}

#[test]
fn test_cancelled_status_is_sticky() {
    let start_time = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
    let session = BookedSession {
        id: Uuid::new_v4(),
        slot: sample_slot(start_time, 1),
        trainer_name: "Minh Tran".to_string(),
        status: SessionStatus::Cancelled,
    };

    let refreshed = session.with_status_at(start_time + chrono::Duration::hours(2));

    assert_eq!(refreshed.status, SessionStatus::Cancelled);
}

#[test]
fn test_upcoming_status_refreshes_to_completed() {
    let start_time = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
    let session = BookedSession {
        id: Uuid::new_v4(),
        slot: sample_slot(start_time, 1),
        trainer_name: "Minh Tran".to_string(),
        status: SessionStatus::Upcoming,
    };

    let refreshed = session.with_status_at(start_time + chrono::Duration::hours(2));

    assert_eq!(refreshed.status, SessionStatus::Completed);
}

#[test]
fn test_session_status_serialization_uses_snake_case() {
    let json = to_string(&SessionStatus::InProgress).expect("Failed to serialize status");
    assert_eq!(json, r#""in_progress""#);
}

#[test]
fn test_cancellation_decision_serialization() {
    let decision = CancellationDecision {
        can_cancel: true,
        has_refund: false,
        refund_percentage: 0,
        hours_until_session: 12.5,
        warning_message: Some("refund forfeited".to_string()),
    };

    let json = to_string(&decision).expect("Failed to serialize decision");
    let deserialized: CancellationDecision = from_str(&json).expect("Failed to deserialize decision");

    assert_eq!(deserialized, decision);
}
