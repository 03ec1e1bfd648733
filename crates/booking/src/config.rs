//! # Booking Configuration Module
//!
//! Loads policy overrides from environment variables, with production
//! defaults where a variable is unset.
//!
//! ## Environment Variables
//!
//! - `GYMBOOK_LEAD_TIME_HOURS`: minimum advance-booking window (default: 5)
//! - `GYMBOOK_REFUND_CUTOFF_HOURS`: full-refund cutoff (default: 24)
//! - `GYMBOOK_UTC_OFFSET_HOURS`: display offset east of UTC (default: 7)
//! - `LOG_LEVEL`: logging level (default: "info")

use chrono::Duration;
use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing::Level;

use crate::localtime;
use crate::policy::BookingPolicy;

/// Configuration for the booking engine.
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use gymbook_booking::config::BookingConfig;
///
/// fn example() -> Result<()> {
///     let config = BookingConfig::from_env()?;
///     println!("Lead time: {}h", config.policy.lead_time.num_hours());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Policy knobs handed to the booking engine
    pub policy: BookingPolicy,

    /// Log level for the application
    pub log_level: Level,
}

impl BookingConfig {
    /// Creates a BookingConfig from environment variables.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A numeric variable is set but cannot be parsed as an integer
    /// - `GYMBOOK_UTC_OFFSET_HOURS` is outside the valid offset range
    pub fn from_env() -> Result<Self> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Creates a BookingConfig from an arbitrary variable source. Tests use
    /// this with a map instead of mutating the process environment.
    pub fn from_source(source: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lead_hours = source("GYMBOOK_LEAD_TIME_HOURS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<i64>()
            .wrap_err("Invalid GYMBOOK_LEAD_TIME_HOURS value")?;

        let cutoff_hours = source("GYMBOOK_REFUND_CUTOFF_HOURS")
            .unwrap_or_else(|| "24".to_string())
            .parse::<i64>()
            .wrap_err("Invalid GYMBOOK_REFUND_CUTOFF_HOURS value")?;

        let offset_hours = source("GYMBOOK_UTC_OFFSET_HOURS")
            .unwrap_or_else(|| localtime::VIETNAM_OFFSET_HOURS.to_string())
            .parse::<i32>()
            .wrap_err("Invalid GYMBOOK_UTC_OFFSET_HOURS value")?;
        let display_offset = localtime::display_offset(offset_hours)
            .map_err(|e| eyre!("Invalid GYMBOOK_UTC_OFFSET_HOURS value: {}", e))?;

        let log_level = match source("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            policy: BookingPolicy::new(
                Duration::hours(lead_hours),
                Duration::hours(cutoff_hours),
                display_offset,
            ),
            log_level,
        })
    }
}
