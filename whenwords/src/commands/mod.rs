/// Config command handlers
pub mod config;

/// Duration formatting and parsing commands
pub mod duration;

/// Relative time and calendar label commands
pub mod time;

/// Version command handlers
pub mod version;
