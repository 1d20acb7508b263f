use crate::context::AppContext;
use crate::format::{self, Formattable};
use libwhenwords::config::OutputFormat;
use libwhenwords::{Result, Timestamp, date_range, human_date, timeago};
use serde::Serialize;

/// A timestamp described relative to a reference point
#[derive(Debug, Serialize, PartialEq)]
pub struct RelativeOutput {
    pub timestamp: i64,
    pub reference: i64,
    pub text: String,
}

impl Formattable for RelativeOutput {
    fn format_pretty(&self) -> String {
        self.text.clone()
    }
}

/// A labelled span between two timestamps
#[derive(Debug, Serialize, PartialEq)]
pub struct RangeOutput {
    pub start: i64,
    pub end: i64,
    pub text: String,
}

impl Formattable for RangeOutput {
    fn format_pretty(&self) -> String {
        self.text.clone()
    }
}

/// The command line default reference is the current time
fn resolve_reference(reference: Option<Timestamp>) -> Timestamp {
    reference.unwrap_or_else(|| Timestamp::from(chrono::Utc::now()))
}

pub fn relative(timestamp: Timestamp, reference: Option<Timestamp>) -> Result<RelativeOutput> {
    let reference = resolve_reference(reference);
    let (ts, reference) = (timestamp.to_unix()?, reference.to_unix()?);
    Ok(RelativeOutput {
        timestamp: ts,
        reference,
        text: timeago(ts, Some(reference))?,
    })
}

pub fn calendar(timestamp: Timestamp, reference: Option<Timestamp>) -> Result<RelativeOutput> {
    let reference = resolve_reference(reference);
    let (ts, reference) = (timestamp.to_unix()?, reference.to_unix()?);
    Ok(RelativeOutput {
        timestamp: ts,
        reference,
        text: human_date(ts, Some(reference))?,
    })
}

pub fn range(start: Timestamp, end: Timestamp) -> Result<RangeOutput> {
    let (start, end) = (start.to_unix()?, end.to_unix()?);
    Ok(RangeOutput {
        start: start.min(end),
        end: start.max(end),
        text: date_range(start, end)?,
    })
}

/// Handle the ago command
pub fn handle_ago(
    ctx: &AppContext,
    timestamp: Timestamp,
    reference: Option<Timestamp>,
    format: OutputFormat,
) {
    format::emit(ctx, relative(timestamp, reference), format);
}

/// Handle the date command
pub fn handle_date(
    ctx: &AppContext,
    timestamp: Timestamp,
    reference: Option<Timestamp>,
    format: OutputFormat,
) {
    format::emit(ctx, calendar(timestamp, reference), format);
}

/// Handle the range command
pub fn handle_range(ctx: &AppContext, start: Timestamp, end: Timestamp, format: OutputFormat) {
    format::emit(ctx, range(start, end), format);
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
