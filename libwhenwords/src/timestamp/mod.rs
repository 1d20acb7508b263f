//! Timestamp normalization.
//!
//! Every public operation accepts anything convertible into a [`Timestamp`]
//! and reduces it to whole Unix seconds in UTC before doing any work.

use crate::error::{Result, WhenError};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;


/// Date-time layouts accepted for strings without an explicit offset.
/// They are read as UTC.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts with an offset that RFC 3339 does not cover.
const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// 2^63, the first float past the end of the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A point in time in one of the representations callers commonly hold.
///
/// # Examples
///
/// ```
/// use libwhenwords::Timestamp;
///
/// assert_eq!(Timestamp::from(1704067200).to_unix().unwrap(), 1704067200);
/// assert_eq!(Timestamp::from(1704067200.9).to_unix().unwrap(), 1704067200);
/// assert_eq!(
///     Timestamp::from("2024-01-01T00:00:00Z").to_unix().unwrap(),
///     1704067200
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    /// Whole seconds since the Unix epoch
    Seconds(i64),
    /// Fractional seconds since the Unix epoch, truncated toward zero
    Float(f64),
    /// An ISO-8601 date or date-time string
    Text(String),
    /// An already parsed UTC date-time
    DateTime(DateTime<Utc>),
}

impl Timestamp {
    /// Normalizes the timestamp to whole Unix seconds.
    ///
    /// # Errors
    ///
    /// - [`WhenError::InvalidTimestampFormat`] if a string is not ISO-8601
    /// - [`WhenError::UnsupportedTimestamp`] if a float is NaN, infinite or
    ///   outside the `i64` range
    pub fn to_unix(&self) -> Result<i64> {
        let seconds = match self {
            Timestamp::Seconds(s) => *s,
            Timestamp::Float(f) => {
                if f.is_nan() {
                    return Err(WhenError::unsupported_timestamp("NaN float"));
                }
                if f.is_infinite() {
                    return Err(WhenError::unsupported_timestamp("infinite float"));
                }
                let whole = f.trunc();
                if !(-I64_LIMIT..I64_LIMIT).contains(&whole) {
                    return Err(WhenError::unsupported_timestamp(format!(
                        "float {f} outside the 64-bit seconds range"
                    )));
                }
                whole as i64
            }
            Timestamp::Text(s) => parse_iso8601(s)?.timestamp(),
            Timestamp::DateTime(dt) => dt.timestamp(),
        };
        log::trace!("normalized {:?} to {}", self, seconds);
        Ok(seconds)
    }
}

/// Parses an ISO-8601 string into a UTC date-time.
///
/// A trailing `Z` is read as `+00:00`. Strings without an offset, including
/// date-only strings, are taken to be UTC.
pub fn parse_iso8601(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    let text = match trimmed.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };

    let rfc3339 = match DateTime::parse_from_rfc3339(&text) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(&text, layout) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&text, layout) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(WhenError::invalid_timestamp_format_with_source(input, rfc3339))
}

/// Parses command-line style input.
///
/// Integer literals are Unix seconds, decimal literals are fractional Unix
/// seconds and anything else must be an ISO-8601 string. Strings are
/// validated eagerly so bad input fails here rather than at first use.
impl FromStr for Timestamp {
    type Err = WhenError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(seconds) = s.parse::<i64>() {
            return Ok(Timestamp::Seconds(seconds));
        }
        if looks_numeric(s) {
            if let Ok(value) = s.parse::<f64>() {
                return Ok(Timestamp::Float(value));
            }
        }
        parse_iso8601(s).map(Timestamp::DateTime)
    }
}

fn looks_numeric(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Seconds(s) => write!(f, "{s}"),
            Timestamp::Float(v) => write!(f, "{v}"),
            Timestamp::Text(s) => f.write_str(s),
            Timestamp::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp::Seconds(value)
    }
}

impl From<i32> for Timestamp {
    fn from(value: i32) -> Self {
        Timestamp::Seconds(i64::from(value))
    }
}

impl From<u32> for Timestamp {
    fn from(value: u32) -> Self {
        Timestamp::Seconds(i64::from(value))
    }
}

impl From<f64> for Timestamp {
    fn from(value: f64) -> Self {
        Timestamp::Float(value)
    }
}

impl From<f32> for Timestamp {
    fn from(value: f32) -> Self {
        Timestamp::Float(f64::from(value))
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp::Text(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp::DateTime(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::DateTime(value.and_utc())
    }
}

impl From<SystemTime> for Timestamp {
    fn from(value: SystemTime) -> Self {
        Timestamp::DateTime(DateTime::<Utc>::from(value))
    }
}

/// Normalizes anything convertible into a [`Timestamp`] to Unix seconds.
pub fn normalize<T: Into<Timestamp>>(timestamp: T) -> Result<i64> {
    timestamp.into().to_unix()
}
