use crate::context::{AppContext, VerbosityLevel};
use libwhenwords::config::{ColorChoice, OutputFormat};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

fn color_enabled(choice: ColorChoice, is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_terminal && std::env::var("NO_COLOR").is_err(),
    }
}

/// Check if we should use colors on stdout
pub fn should_color(ctx: &AppContext) -> bool {
    color_enabled(ctx.config.output.color, std::io::stdout().is_terminal())
}

/// Check if we should use colors on stderr
pub fn should_color_stderr(ctx: &AppContext) -> bool {
    color_enabled(ctx.config.output.color, std::io::stderr().is_terminal())
}

/// Colorize an X mark for errors if colors are enabled on stderr
pub fn error_mark(ctx: &AppContext) -> String {
    if should_color_stderr(ctx) {
        format!("{}", "✗".red().bold())
    } else {
        "✗".to_string()
    }
}

/// Colorize a checkmark for success if colors are enabled
pub fn checkmark(ctx: &AppContext) -> String {
    if should_color(ctx) {
        format!("{}", "✓".green().bold())
    } else {
        "✓".to_string()
    }
}

/// Print a success message with optional coloring
pub fn success(ctx: &AppContext, message: &str) {
    println!("{} {}", checkmark(ctx), message);
}

/// Print an error message with optional coloring
pub fn error(ctx: &AppContext, message: &str) {
    eprintln!("{} {}", error_mark(ctx), message);
}

/// Lines describing a failure. With `-v` or more, each underlying cause
/// follows on its own line.
pub fn error_report(ctx: &AppContext, err: &dyn std::error::Error) -> Vec<String> {
    let mut lines = vec![err.to_string()];
    if ctx.verbosity >= VerbosityLevel::Verbose {
        let mut cause = err.source();
        while let Some(e) = cause {
            lines.push(format!("  caused by: {}", e));
            cause = e.source();
        }
    }
    lines
}

/// Trait for types that can be formatted for CLI output
pub trait Formattable: Serialize {
    /// Format the type for pretty (human-readable) output
    fn format_pretty(&self) -> String;
}

/// Format a single item for output
pub fn format_output<T: Formattable>(item: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Ok(item.format_pretty()),
        OutputFormat::Json => serde_json::to_string_pretty(item)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(item).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

/// Print a command result, or report the error and exit with status 1
pub fn emit<T: Formattable>(ctx: &AppContext, result: libwhenwords::Result<T>, format: OutputFormat) {
    let item = match result {
        Ok(item) => item,
        Err(e) => {
            error(ctx, &error_report(ctx, &e).join("\n"));
            std::process::exit(1);
        }
    };

    match format_output(&item, format) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            error(ctx, &e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
