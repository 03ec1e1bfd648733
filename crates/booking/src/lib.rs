//! # Gymbook Booking
//!
//! The booking engine for the Gymbook PT (personal trainer) flow. It decides
//! which of a trainer's schedule slots are offerable for booking on a given
//! day, and whether a booked session may be cancelled and refunded.
//!
//! ## Architecture
//!
//! - **localtime**: parsing of backend timestamps and conversion to the
//!   fixed local display offset (UTC+7 by default)
//! - **policy**: the `BookingPolicy` knobs (lead time, refund cutoff,
//!   display offset)
//! - **availability**: slot filtering for the booking screen
//! - **cancellation**: the refund decision table for the cancel dialog
//! - **config**: environment-driven policy overrides
//!
//! Every operation is pure and synchronous. Wall-clock time is always an
//! explicit `now: DateTime<Utc>` argument so callers and tests control it;
//! the `*_now` variants read the system clock at the call site.

/// Slot filtering for the booking screen
pub mod availability;
/// Cancellation and refund decision logic
pub mod cancellation;
/// Environment-driven configuration
pub mod config;
/// Timestamp parsing and local-time conversion
pub mod localtime;
/// Policy knobs shared by availability and cancellation
pub mod policy;

pub use config::BookingConfig;
pub use policy::BookingPolicy;
