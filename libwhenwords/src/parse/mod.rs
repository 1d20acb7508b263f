//! Parsing human-written durations ("2h30m", "1 day, 2 hours", "1:30:00").

use crate::error::{Result, WhenError};
use crate::units::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH, SECONDS_PER_WEEK,
    SECONDS_PER_YEAR,
};
use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
mod tests;

/// `H:MM` or `H:MM:SS`, anchored to the whole input.
static COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+):([0-9]{1,2})(?::([0-9]{1,2}))?$").expect("colon pattern is valid")
});

/// Unit spellings in scan order. Longer spellings come first inside each
/// alternation so the full word wins over its abbreviation.
const UNIT_SPELLINGS: [(&str, u64); 7] = [
    ("weeks?|wks?|w", SECONDS_PER_WEEK),
    ("years?|yrs?|y", SECONDS_PER_YEAR),
    ("months?|mos?", SECONDS_PER_MONTH),
    ("days?|d", SECONDS_PER_DAY),
    ("hours?|hrs?|h", SECONDS_PER_HOUR),
    ("minutes?|mins?|m", SECONDS_PER_MINUTE),
    ("seconds?|secs?|s", 1),
];

struct UnitPattern {
    regex: Regex,
    seconds: u64,
}

static UNIT_PATTERNS: LazyLock<Vec<UnitPattern>> = LazyLock::new(|| {
    UNIT_SPELLINGS
        .iter()
        .map(|(spellings, seconds)| UnitPattern {
            regex: Regex::new(&format!(r"([0-9]+(?:\.[0-9]+)?)\s*(?:{spellings})"))
                .expect("unit pattern is valid"),
            seconds: *seconds,
        })
        .collect()
});

/// A unit token must end the input, or be followed by a non-word character
/// or directly by the next number ("2h30m").
fn ends_unit(text: &str, end: usize) -> bool {
    match text[end..].chars().next() {
        None => true,
        Some(c) if c.is_ascii_digit() => true,
        Some(c) => !(c.is_alphanumeric() || c == '_'),
    }
}

/// Sums every non-overlapping `<number><unit>` match of `pattern` in `text`.
/// Returns `None` when nothing matched.
fn scan_unit(text: &str, pattern: &UnitPattern) -> Option<f64> {
    let mut total = None;
    let mut at = 0;
    while at <= text.len() {
        let Some(caps) = pattern.regex.captures_at(text, at) else {
            break;
        };
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        if ends_unit(text, whole.end()) {
            // digits with an optional fraction always parse
            let value: f64 = number.as_str().parse().unwrap_or(0.0);
            *total.get_or_insert(0.0) += value * pattern.seconds as f64;
            at = whole.end();
        } else {
            // retry one character further along, like a backtracking engine would
            at = whole.start() + text[whole.start()..].chars().next().map_or(1, char::len_utf8);
        }
    }
    total
}

fn parse_colon(input: &str, caps: &regex::Captures<'_>) -> Result<u64> {
    let field = |i: usize| -> Result<u64> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .map_err(|_| WhenError::parse(input, "Duration out of range")),
            None => Ok(0),
        }
    };
    let (hours, minutes, seconds) = (field(1)?, field(2)?, field(3)?);

    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes * SECONDS_PER_MINUTE + seconds))
        .ok_or_else(|| WhenError::parse(input, "Duration out of range"))
}

/// Parses a human-written duration into whole seconds.
///
/// Accepts colon notation (`2:30`, `1:30:00`) or any mix of numbers tagged
/// with units (`2h30m`, `2 hours and 30 minutes`, `1.5h`, `1 week`).
/// Matching is case-insensitive and tolerant of extra whitespace.
///
/// Fractional totals are rounded half away from zero, so `0.5s` parses to 1.
///
/// # Examples
///
/// ```
/// use libwhenwords::parse_duration;
///
/// assert_eq!(parse_duration("2h30m").unwrap(), 9000);
/// assert_eq!(parse_duration("2:30").unwrap(), 9000);
/// assert_eq!(parse_duration("1.5h").unwrap(), 5400);
/// assert!(parse_duration("42").is_err());
/// ```
///
/// # Errors
///
/// [`WhenError::Parse`] for empty input, negative input, or input with no
/// recognizable unit.
pub fn parse_duration(input: &str) -> Result<u64> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(WhenError::parse(input, "Cannot parse empty string"));
    }
    if normalized.starts_with('-') {
        return Err(WhenError::parse(input, "Negative durations are not allowed"));
    }

    if let Some(caps) = COLON.captures(&normalized) {
        log::debug!("parse_duration: {:?} uses colon notation", input);
        return parse_colon(input, &caps);
    }

    let mut total: Option<f64> = None;
    for pattern in UNIT_PATTERNS.iter() {
        if let Some(sum) = scan_unit(&normalized, pattern) {
            *total.get_or_insert(0.0) += sum;
        }
    }

    let Some(total) = total else {
        return Err(WhenError::parse(input, "Cannot parse duration"));
    };
    log::debug!("parse_duration: {:?} totals {}s", input, total);

    let rounded = total.round();
    if rounded >= u64::MAX as f64 {
        return Err(WhenError::parse(input, "Duration out of range"));
    }
    Ok(rounded as u64)
}
