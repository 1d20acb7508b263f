//! Calendar-relative labels ("Yesterday", "Last Friday", "January 15–22, 2024").
//!
//! All arithmetic is on UTC calendar days.

use crate::error::{Result, WhenError};
use crate::timestamp::Timestamp;
use crate::units::SECONDS_PER_DAY;
use chrono::{DateTime, Datelike, Utc};


const SECONDS_PER_DAY_I64: i64 = SECONDS_PER_DAY as i64;

static WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

static MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// UTC calendar fields of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComponents {
    pub year: i32,
    /// Zero-indexed month, 0 = January
    pub month: u32,
    /// Day of month, starting at 1
    pub day: u32,
    /// 0 = Sunday
    pub weekday: u32,
}

impl DateComponents {
    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month as usize]
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday as usize]
    }
}

/// Splits a Unix timestamp into UTC calendar fields.
///
/// # Errors
///
/// [`WhenError::InvalidArgument`] if the timestamp lies outside the range
/// chrono can represent.
pub fn date_components(ts: i64) -> Result<DateComponents> {
    let dt = DateTime::<Utc>::from_timestamp(ts, 0).ok_or_else(|| {
        WhenError::invalid_argument(format!(
            "timestamp {ts} is outside the supported calendar range"
        ))
    })?;
    Ok(DateComponents {
        year: dt.year(),
        month: dt.month0(),
        day: dt.day(),
        weekday: dt.weekday().num_days_from_sunday(),
    })
}

/// Returns the timestamp of UTC midnight on the same calendar day as `ts`.
pub fn start_of_day_utc(ts: i64) -> i64 {
    ts.div_euclid(SECONDS_PER_DAY_I64) * SECONDS_PER_DAY_I64
}

/// Labels `timestamp` relative to the calendar day of `reference`.
///
/// Adjacent days become "Yesterday"/"Tomorrow", the rest of the surrounding
/// week uses weekday names, and anything further out is a date. The year is
/// only shown when it differs from the reference year.
///
/// # Examples
///
/// ```
/// use libwhenwords::human_date;
///
/// let monday = 1705276800; // 2024-01-15
/// assert_eq!(human_date(monday, Some(monday)).unwrap(), "Today");
/// assert_eq!(human_date(monday - 2 * 86400, Some(monday)).unwrap(), "Last Saturday");
/// assert_eq!(human_date(monday - 7 * 86400, Some(monday)).unwrap(), "January 8");
/// ```
pub fn human_date<T, R>(timestamp: T, reference: Option<R>) -> Result<String>
where
    T: Into<Timestamp>,
    R: Into<Timestamp>,
{
    let ts = timestamp.into().to_unix()?;
    let reference = match reference {
        Some(r) => r.into().to_unix()?,
        None => ts,
    };

    let target = date_components(ts)?;
    let base = date_components(reference)?;
    let day_diff = (start_of_day_utc(ts) - start_of_day_utc(reference)) / SECONDS_PER_DAY_I64;
    log::debug!("human_date: {} is {} day(s) from {}", ts, day_diff, reference);

    let label = match day_diff {
        0 => "Today".to_string(),
        -1 => "Yesterday".to_string(),
        1 => "Tomorrow".to_string(),
        -6..=-2 => format!("Last {}", target.weekday_name()),
        2..=6 => format!("This {}", target.weekday_name()),
        _ if target.year == base.year => format!("{} {}", target.month_name(), target.day),
        _ => format!("{} {}, {}", target.month_name(), target.day, target.year),
    };
    Ok(label)
}

/// Formats the span between two timestamps, collapsing shared month and
/// year. Endpoints may be passed in either order.
///
/// # Examples
///
/// ```
/// use libwhenwords::date_range;
///
/// assert_eq!(date_range(1705881600, 1705276800).unwrap(), "January 15–22, 2024");
/// ```
pub fn date_range<S, E>(start: S, end: E) -> Result<String>
where
    S: Into<Timestamp>,
    E: Into<Timestamp>,
{
    let mut start = start.into().to_unix()?;
    let mut end = end.into().to_unix()?;
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let first = date_components(start)?;
    let last = date_components(end)?;

    let label = if start_of_day_utc(start) == start_of_day_utc(end) {
        format!("{} {}, {}", first.month_name(), first.day, first.year)
    } else if first.year == last.year && first.month == last.month {
        format!("{} {}–{}, {}", first.month_name(), first.day, last.day, first.year)
    } else if first.year == last.year {
        format!(
            "{} {} – {} {}, {}",
            first.month_name(),
            first.day,
            last.month_name(),
            last.day,
            first.year
        )
    } else {
        format!(
            "{} {}, {} – {} {}, {}",
            first.month_name(),
            first.day,
            first.year,
            last.month_name(),
            last.day,
            last.year
        )
    };
    Ok(label)
}
