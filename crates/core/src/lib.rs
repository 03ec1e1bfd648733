//! # Gymbook Core
//!
//! Domain models and the error taxonomy for the Gymbook booking engine.
//! This crate holds the shared types exchanged between the backend wire
//! boundary and the booking logic in `gymbook-booking`; it performs no I/O
//! and carries no policy of its own.

pub mod errors;
pub mod models;
