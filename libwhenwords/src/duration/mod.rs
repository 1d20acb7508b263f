//! Duration formatting ("2 hours, 30 minutes", "2h 30m").

use crate::error::{Result, WhenError};
use crate::units::{DURATION_UNITS, Unit};
use serde::{Deserialize, Serialize};


/// Options controlling how [`duration`] renders.
///
/// # Examples
///
/// ```
/// use libwhenwords::DurationOptions;
///
/// let opts = DurationOptions::default().compact(true).max_units(3);
/// assert!(opts.compact);
/// assert_eq!(opts.max_units, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationOptions {
    /// Abbreviated suffixes joined by spaces (`1h 1m`) instead of words
    /// joined by commas (`1 hour, 1 minute`). Defaults to `false`.
    #[serde(default)]
    pub compact: bool,

    /// Maximum number of unit components to show. Defaults to 2.
    #[serde(default = "default_max_units")]
    pub max_units: usize,
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self {
            compact: false,
            max_units: default_max_units(),
        }
    }
}

fn default_max_units() -> usize {
    2
}

impl DurationOptions {
    /// Sets compact rendering.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Sets the maximum number of components.
    pub fn max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }
}

/// A second count accepted by [`duration`].
///
/// Implemented for the primitive integer and float types and for
/// [`std::time::Duration`]. Floats are truncated toward zero.
pub trait DurationSeconds {
    /// Returns the whole, non-negative number of seconds.
    ///
    /// # Errors
    ///
    /// [`WhenError::InvalidArgument`] if the value is negative or not finite.
    fn whole_seconds(self) -> Result<u64>;
}

macro_rules! signed_seconds {
    ($($t:ty),*) => {$(
        impl DurationSeconds for $t {
            fn whole_seconds(self) -> Result<u64> {
                u64::try_from(self).map_err(|_| {
                    WhenError::invalid_argument(format!(
                        "duration must be non-negative, got {self}"
                    ))
                })
            }
        }
    )*};
}

signed_seconds!(i32, i64);

impl DurationSeconds for u32 {
    fn whole_seconds(self) -> Result<u64> {
        Ok(u64::from(self))
    }
}

impl DurationSeconds for u64 {
    fn whole_seconds(self) -> Result<u64> {
        Ok(self)
    }
}

impl DurationSeconds for f64 {
    fn whole_seconds(self) -> Result<u64> {
        if !self.is_finite() {
            return Err(WhenError::invalid_argument(format!(
                "duration must be a finite number, got {self}"
            )));
        }
        if self < 0.0 {
            return Err(WhenError::invalid_argument(format!(
                "duration must be non-negative, got {self}"
            )));
        }
        Ok(self.trunc() as u64)
    }
}

impl DurationSeconds for f32 {
    fn whole_seconds(self) -> Result<u64> {
        f64::from(self).whole_seconds()
    }
}

impl DurationSeconds for std::time::Duration {
    fn whole_seconds(self) -> Result<u64> {
        Ok(self.as_secs())
    }
}

/// One non-zero component of a decomposed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Part {
    value: u64,
    unit: Unit,
}

/// Greedy decomposition against the unit table, keeping non-zero parts.
fn decompose(mut remaining: u64) -> Vec<Part> {
    let mut parts = Vec::new();
    for unit in DURATION_UNITS.iter() {
        let value = remaining / unit.seconds;
        remaining %= unit.seconds;
        if value > 0 {
            parts.push(Part { value, unit: *unit });
        }
    }
    parts
}

/// Keeps the first `max_units` parts. The last kept part is bumped by one
/// when the dropped remainder is strictly more than half of its unit.
fn truncate(mut parts: Vec<Part>, max_units: usize) -> Vec<Part> {
    if parts.len() <= max_units {
        return parts;
    }

    let dropped: u64 = parts[max_units..]
        .iter()
        .map(|p| p.value * p.unit.seconds)
        .sum();
    parts.truncate(max_units);

    if let Some(last) = parts.last_mut() {
        // exactly half does not carry
        if u128::from(dropped) * 2 > u128::from(last.unit.seconds) {
            log::debug!(
                "duration: carrying {}s of dropped parts into {}",
                dropped,
                last.unit.name
            );
            last.value += 1;
        }
    }
    parts
}

/// Formats a second count as a human-readable duration.
///
/// # Examples
///
/// ```
/// use libwhenwords::{duration, DurationOptions};
///
/// assert_eq!(duration(3661, DurationOptions::default()).unwrap(), "1 hour, 1 minute");
/// assert_eq!(
///     duration(3661, DurationOptions::default().compact(true)).unwrap(),
///     "1h 1m"
/// );
/// assert_eq!(
///     duration(93661, DurationOptions::default().max_units(3)).unwrap(),
///     "1 day, 2 hours, 1 minute"
/// );
/// ```
///
/// # Errors
///
/// [`WhenError::InvalidArgument`] for negative or non-finite input, or when
/// `max_units` is zero.
pub fn duration<S: DurationSeconds>(seconds: S, options: DurationOptions) -> Result<String> {
    let seconds = seconds.whole_seconds()?;
    if options.max_units == 0 {
        return Err(WhenError::invalid_argument("max_units must be at least 1"));
    }

    if seconds == 0 {
        return Ok(if options.compact { "0s" } else { "0 seconds" }.to_string());
    }

    let parts = truncate(decompose(seconds), options.max_units);

    let rendered: Vec<String> = if options.compact {
        parts
            .iter()
            .map(|p| format!("{}{}", p.value, p.unit.abbrev))
            .collect()
    } else {
        parts
            .iter()
            .map(|p| format!("{} {}", p.value, p.unit.label(p.value)))
            .collect()
    };

    Ok(rendered.join(if options.compact { " " } else { ", " }))
}
