//! Library configuration.
//!
//! Holds the default [`DurationOptions`] and output preferences. Values are
//! layered with the `config` crate: built-in defaults, then an optional
//! YAML file, then (optionally) `WHENWORDS_*` environment variables.

use crate::duration::DurationOptions;
use crate::error::{Result, WhenError};
use config::{Config as ConfigRs, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub duration: DurationOptions,
    #[serde(default)]
    pub output: Output,
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

impl Config {
    /// Parses a `Config` from a YAML string layered over the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(s, FileFormat::Yaml));
        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional YAML file.
    ///
    /// A missing `path` yields the defaults. A path that does not exist is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::defaults()?;
        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }
        Self::from_builder(builder, path)
    }

    /// Like [`Config::load`], then applies environment overrides such as
    /// `WHENWORDS_DURATION__MAX_UNITS=3` or `WHENWORDS_OUTPUT__FORMAT=json`.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::defaults()?;
        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(false));
        }
        let builder = builder.add_source(
            Environment::with_prefix("WHENWORDS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        Self::from_builder(builder, path)
    }

    fn defaults() -> Result<Builder> {
        Ok(ConfigRs::builder().add_source(ConfigRs::try_from(&Config::default())?))
    }

    fn from_builder(builder: Builder, path: Option<&Path>) -> Result<Self> {
        let path = path.map(|p| p.display().to_string());
        let config: Config = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                WhenError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path.clone(),
                    e,
                )
            })?;
        config.validate(path)
    }

    fn validate(self, path: Option<String>) -> Result<Self> {
        if self.duration.max_units == 0 {
            return Err(WhenError::config(
                "duration.max_units must be at least 1".to_string(),
                path,
            ));
        }
        Ok(self)
    }
}

/// Output preferences for front ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Output {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorChoice,
}

/// Enum for output formats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,

    Json,

    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Pretty,
        }
    }
}

/// Enum for color output choices.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,

    Always,

    Never,
}

impl ColorChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}
