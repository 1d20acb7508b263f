//! Error types for whenwords
//!
//! Every fallible operation in the library returns [`WhenError`]. Messages
//! always name the offending value so callers can surface them directly.

use thiserror::Error;


/// Main error type for whenwords operations
#[derive(Error, Debug)]
pub enum WhenError {
    /// A timestamp string that is not valid ISO-8601
    #[error("Invalid timestamp format: {input}")]
    InvalidTimestampFormat {
        input: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A timestamp value of a kind that cannot be turned into Unix seconds
    #[error("Unsupported timestamp type: {kind}")]
    UnsupportedTimestamp { kind: String },

    /// An argument outside the accepted domain (negative durations, zero max_units)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A duration string that could not be parsed
    #[error("{message}: {input:?}")]
    Parse { input: String, message: String },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for whenwords operations
pub type Result<T> = std::result::Result<T, WhenError>;

impl WhenError {
    /// Creates a new invalid timestamp format error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libwhenwords::error::WhenError;
    ///
    /// let err = WhenError::invalid_timestamp_format("not-a-date");
    /// assert!(matches!(err, WhenError::InvalidTimestampFormat { .. }));
    /// assert_eq!(err.to_string(), "Invalid timestamp format: not-a-date");
    /// ```
    pub fn invalid_timestamp_format<S: Into<String>>(input: S) -> Self {
        Self::InvalidTimestampFormat {
            input: input.into(),
            source: None,
        }
    }

    /// Creates a new invalid timestamp format error with the underlying parse error.
    pub fn invalid_timestamp_format_with_source<S, E>(input: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidTimestampFormat {
            input: input.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new unsupported timestamp error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libwhenwords::error::WhenError;
    ///
    /// let err = WhenError::unsupported_timestamp("NaN");
    /// assert!(matches!(err, WhenError::UnsupportedTimestamp { .. }));
    /// ```
    pub fn unsupported_timestamp<S: Into<String>>(kind: S) -> Self {
        Self::UnsupportedTimestamp { kind: kind.into() }
    }

    /// Creates a new invalid argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libwhenwords::error::WhenError;
    ///
    /// let err = WhenError::invalid_argument("duration must be non-negative, got -1");
    /// assert!(matches!(err, WhenError::InvalidArgument { .. }));
    /// ```
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a new parse error for `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libwhenwords::error::WhenError;
    ///
    /// let err = WhenError::parse("42", "Cannot parse duration");
    /// assert_eq!(err.to_string(), "Cannot parse duration: \"42\"");
    /// ```
    pub fn parse<S: Into<String>, M: Into<String>>(input: S, message: M) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libwhenwords::error::WhenError;
    ///
    /// let err = WhenError::config("max_units must be at least 1", None::<&str>);
    /// assert!(matches!(err, WhenError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}

impl From<config::ConfigError> for WhenError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_with_source("Failed to build configuration", None::<&str>, err)
    }
}
