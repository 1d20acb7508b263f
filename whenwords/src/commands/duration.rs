use crate::context::AppContext;
use crate::format::{self, Formattable};
use libwhenwords::config::OutputFormat;
use libwhenwords::{DurationOptions, Result, duration, parse_duration};
use serde::Serialize;

/// A formatted duration
#[derive(Debug, Serialize, PartialEq)]
pub struct DurationOutput {
    pub seconds: f64,
    pub compact: bool,
    pub max_units: usize,
    pub text: String,
}

impl Formattable for DurationOutput {
    fn format_pretty(&self) -> String {
        self.text.clone()
    }
}

/// A parsed duration
#[derive(Debug, Serialize, PartialEq)]
pub struct ParsedOutput {
    pub input: String,
    pub seconds: u64,
}

impl Formattable for ParsedOutput {
    fn format_pretty(&self) -> String {
        self.seconds.to_string()
    }
}

/// Merge CLI flags over the configured duration defaults
pub fn resolve_options(
    ctx: &AppContext,
    compact: Option<bool>,
    max_units: Option<usize>,
) -> DurationOptions {
    let defaults = ctx.config.duration;
    DurationOptions::default()
        .compact(compact.unwrap_or(defaults.compact))
        .max_units(max_units.unwrap_or(defaults.max_units))
}

pub fn format_duration(seconds: f64, options: DurationOptions) -> Result<DurationOutput> {
    Ok(DurationOutput {
        seconds,
        compact: options.compact,
        max_units: options.max_units,
        text: duration(seconds, options)?,
    })
}

pub fn parse(input: &str) -> Result<ParsedOutput> {
    Ok(ParsedOutput {
        input: input.to_string(),
        seconds: parse_duration(input)?,
    })
}

/// Handle the duration command
pub fn handle_duration(
    ctx: &AppContext,
    seconds: f64,
    compact: Option<bool>,
    max_units: Option<usize>,
    format: OutputFormat,
) {
    let options = resolve_options(ctx, compact, max_units);
    log::debug!("duration options: {:?}", options);
    format::emit(ctx, format_duration(seconds, options), format);
}

/// Handle the parse command
pub fn handle_parse(ctx: &AppContext, input: &str, format: OutputFormat) {
    format::emit(ctx, parse(input), format);
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
