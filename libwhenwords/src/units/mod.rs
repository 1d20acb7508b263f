//! Calendar unit tables shared by the duration formatter and parser.
//!
//! Month and year are fixed-width approximations: a month is 30 days and a
//! year is 365 days.

#[cfg(test)]
mod tests;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_WEEK: u64 = 604_800;
pub const SECONDS_PER_MONTH: u64 = 2_592_000;
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// A named unit of time with a fixed length in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Singular English name, e.g. `"hour"`
    pub name: &'static str,
    /// Compact suffix, e.g. `"h"`
    pub abbrev: &'static str,
    pub seconds: u64,
}

impl Unit {
    /// Returns the singular name for 1 and the plural for anything else.
    pub fn label(&self, count: u64) -> String {
        if count == 1 {
            self.name.to_string()
        } else {
            format!("{}s", self.name)
        }
    }
}

pub const YEAR: Unit = Unit {
    name: "year",
    abbrev: "y",
    seconds: SECONDS_PER_YEAR,
};
pub const MONTH: Unit = Unit {
    name: "month",
    abbrev: "mo",
    seconds: SECONDS_PER_MONTH,
};
pub const WEEK: Unit = Unit {
    name: "week",
    abbrev: "w",
    seconds: SECONDS_PER_WEEK,
};
pub const DAY: Unit = Unit {
    name: "day",
    abbrev: "d",
    seconds: SECONDS_PER_DAY,
};
pub const HOUR: Unit = Unit {
    name: "hour",
    abbrev: "h",
    seconds: SECONDS_PER_HOUR,
};
pub const MINUTE: Unit = Unit {
    name: "minute",
    abbrev: "m",
    seconds: SECONDS_PER_MINUTE,
};
pub const SECOND: Unit = Unit {
    name: "second",
    abbrev: "s",
    seconds: 1,
};

/// Units used to decompose a duration, largest first. Order matters for the
/// greedy decomposition. Weeks are deliberately absent.
pub static DURATION_UNITS: [Unit; 6] = [YEAR, MONTH, DAY, HOUR, MINUTE, SECOND];
