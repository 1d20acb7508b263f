use crate::context::AppContext;
use crate::format::{self, Formattable};
use libwhenwords::config::OutputFormat;
use serde::Serialize;

/// Versions of the binary and the library it was built against
#[derive(Debug, Serialize, PartialEq)]
pub struct VersionOutput {
    pub whenwords: String,
    pub libwhenwords: String,
}

impl VersionOutput {
    pub fn current() -> Self {
        Self {
            whenwords: env!("CARGO_PKG_VERSION").to_string(),
            libwhenwords: libwhenwords::version().to_string(),
        }
    }
}

impl Formattable for VersionOutput {
    fn format_pretty(&self) -> String {
        format!(
            "whenwords {}\nlibwhenwords {}",
            self.whenwords, self.libwhenwords
        )
    }
}

/// Handle the version command
pub fn handle_version(ctx: &AppContext, format: OutputFormat) {
    format::emit(ctx, Ok(VersionOutput::current()), format);
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
