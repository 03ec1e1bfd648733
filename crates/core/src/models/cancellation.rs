use serde::{Deserialize, Serialize};

/// Outcome of evaluating a booked session against the cancellation policy.
///
/// The refund policy is strictly binary: `refund_percentage` is either 0 or
/// 100, never prorated. `hours_until_session` is signed and fractional;
/// negative once the session has started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationDecision {
    pub can_cancel: bool,
    pub has_refund: bool,
    pub refund_percentage: u8,
    pub hours_until_session: f64,
    pub warning_message: Option<String>,
}
