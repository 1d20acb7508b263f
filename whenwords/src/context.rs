//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config;
use libwhenwords::Config;
use libwhenwords::config::{ColorChoice, OutputFormat};
use std::env;

/// How chatty logging should be, from the repeated `-v` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::Debug,
            _ => VerbosityLevel::Trace,
        }
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        match self {
            VerbosityLevel::Normal => log::LevelFilter::Warn,
            VerbosityLevel::Verbose => log::LevelFilter::Info,
            VerbosityLevel::Debug => log::LevelFilter::Debug,
            VerbosityLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli_color: Option<ColorChoice>, verbosity: VerbosityLevel) -> Self {
        // 1 + 2. Defaults merged with the config file, if there is one
        let config_path = config::get_config_path();
        let mut config = match Config::load_with_env(Some(&config_path)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config at {}: {}", config_path.display(), e);
                Config::default()
            }
        };

        // 3. Apply environment variable overrides
        if let Ok(color) = env::var("WHENWORDS_COLOR") {
            config.output.color = ColorChoice::from(color.as_str());
        }
        if let Ok(format) = env::var("WHENWORDS_FORMAT") {
            config.output.format = OutputFormat::from(format.as_str());
        }

        // 4. Apply CLI flag overrides (highest priority)
        if let Some(color) = cli_color {
            config.output.color = color;
        }

        Self { config, verbosity }
    }

    /// Resolve the output format, preferring an explicit flag over config
    pub fn output_format(&self, flag: Option<&str>) -> OutputFormat {
        flag.map(OutputFormat::from)
            .unwrap_or(self.config.output.format)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
