//! Relative time formatting ("3 hours ago", "in 2 days").

use crate::error::Result;
use crate::timestamp::Timestamp;
use crate::units::{DAY, HOUR, MINUTE, MONTH, Unit, YEAR};


/// How a bucket turns an absolute difference into a count.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// "just now", no count
    JustNow,
    /// Always exactly one of the unit
    One(Unit),
    /// Half-up rounded count of the unit, optionally capped
    Rounded { unit: Unit, cap: Option<u64> },
}

/// Buckets tested in order; each applies while the difference is below its bound.
static BUCKETS: [(u64, Rule); 11] = [
    (45, Rule::JustNow),
    (90, Rule::One(MINUTE)),
    (45 * 60, Rule::Rounded { unit: MINUTE, cap: None }),
    (90 * 60, Rule::One(HOUR)),
    (22 * 3_600, Rule::Rounded { unit: HOUR, cap: None }),
    (36 * 3_600, Rule::One(DAY)),
    (26 * 86_400, Rule::Rounded { unit: DAY, cap: None }),
    (46 * 86_400, Rule::One(MONTH)),
    // 320 days is already a year; cap keeps "11 months" from appearing.
    (320 * 86_400, Rule::Rounded { unit: MONTH, cap: Some(10) }),
    (548 * 86_400, Rule::One(YEAR)),
    (u64::MAX, Rule::Rounded { unit: YEAR, cap: None }),
];

/// Rounds `value / unit` half up, i.e. `floor(value / unit + 0.5)`.
pub(crate) fn round_half_up(value: u64, unit: u64) -> u64 {
    let (value, unit) = (u128::from(value), u128::from(unit));
    ((2 * value + unit) / (2 * unit)) as u64
}

/// Describes `timestamp` relative to `reference`.
///
/// When `reference` is `None` the timestamp is compared with itself, which
/// always yields `"just now"`.
///
/// # Examples
///
/// ```
/// use libwhenwords::timeago;
///
/// assert_eq!(timeago(1704067155, Some(1704067200)).unwrap(), "1 minute ago");
/// assert_eq!(timeago(1704067260, Some(1704067200)).unwrap(), "in 1 minute");
/// assert_eq!(timeago(1704067200, None::<i64>).unwrap(), "just now");
/// ```
///
/// # Errors
///
/// Fails if either timestamp cannot be normalized.
pub fn timeago<T, R>(timestamp: T, reference: Option<R>) -> Result<String>
where
    T: Into<Timestamp>,
    R: Into<Timestamp>,
{
    let ts = timestamp.into().to_unix()?;
    let reference = match reference {
        Some(r) => r.into().to_unix()?,
        None => ts,
    };

    let abs_diff = reference.abs_diff(ts);
    let is_future = ts > reference;

    let rule = BUCKETS
        .iter()
        .find(|(bound, _)| abs_diff < *bound)
        .map(|(_, rule)| *rule)
        .unwrap_or(Rule::Rounded { unit: YEAR, cap: None });

    let (value, unit) = match rule {
        Rule::JustNow => {
            log::debug!("timeago: |{}s| is within the just-now window", abs_diff);
            return Ok("just now".to_string());
        }
        Rule::One(unit) => (1, unit),
        Rule::Rounded { unit, cap } => {
            let value = round_half_up(abs_diff, unit.seconds);
            (cap.map_or(value, |c| value.min(c)), unit)
        }
    };
    log::debug!("timeago: |{}s| -> {} {}", abs_diff, value, unit.name);

    let label = unit.label(value);
    if is_future {
        Ok(format!("in {value} {label}"))
    } else {
        Ok(format!("{value} {label} ago"))
    }
}
