//! whenwords - human-friendly time formatting and parsing
//!
//! Turns Unix timestamps into relative-time, duration and calendar strings,
//! and parses human-written durations back into seconds. Everything is
//! computed in UTC with fixed-width months (30 days) and years (365 days).
//!
//! # Quick Start
//!
//! ```
//! use libwhenwords::{date_range, duration, human_date, parse_duration, timeago, DurationOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let now = 1705276800; // 2024-01-15T00:00:00Z
//!
//!     assert_eq!(timeago(now - 3 * 3600, Some(now))?, "3 hours ago");
//!     assert_eq!(duration(9000, DurationOptions::default())?, "2 hours, 30 minutes");
//!     assert_eq!(parse_duration("2h30m")?, 9000);
//!     assert_eq!(human_date(now - 86400, Some(now))?, "Yesterday");
//!     assert_eq!(date_range(now, now + 7 * 86400)?, "January 15–22, 2024");
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Timestamp`] - any accepted timestamp representation
//! - [`DurationOptions`] - compact rendering and component limit
//! - [`WhenError`] - the single error type
//! - [`Config`] - file/env backed defaults for front ends
//!
//! All functions are pure and may be called concurrently without
//! synchronization.

#![warn(clippy::all)]

/// Returns the libwhenwords crate version.
///
/// # Examples
///
/// ```
/// let version = libwhenwords::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub use calendar::{DateComponents, date_range, human_date};
pub use config::Config;
pub use duration::{DurationOptions, DurationSeconds, duration};
pub use error::{Result, WhenError};
pub use parse::parse_duration;
pub use timeago::timeago;
pub use timestamp::Timestamp;

pub mod calendar;
pub mod config;
pub mod duration;
pub mod error;
pub mod parse;
pub mod timeago;
pub mod timestamp;
pub mod units;
