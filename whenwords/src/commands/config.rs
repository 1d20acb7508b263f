use crate::config;
use crate::context::AppContext;
use crate::format::{self, Formattable};
use libwhenwords::Config;
use libwhenwords::config::OutputFormat;
use serde::Serialize;

/// Configuration as shown by `config get`
#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub path: String,
    #[serde(flatten)]
    pub config: Config,
}

impl Formattable for ConfigView {
    fn format_pretty(&self) -> String {
        format!(
            "# {}\nduration.compact = {}\nduration.max_units = {}\noutput.format = {}\noutput.color = {}",
            self.path,
            self.config.duration.compact,
            self.config.duration.max_units,
            self.config.output.format.as_str(),
            self.config.output.color.as_str(),
        )
    }
}

/// Handle the config init subcommand
pub fn handle_init(ctx: &AppContext) {
    let config_path = config::get_config_path();
    match config::init_config(&config_path) {
        Ok(_) => {
            format::success(
                ctx,
                &format!("Initialized config file at: {}", config_path.display()),
            );
        }
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the config get subcommand, showing the effective configuration
pub fn handle_get(ctx: &AppContext, format: OutputFormat) {
    let view = ConfigView {
        path: config::get_config_path().display().to_string(),
        config: ctx.config.clone(),
    };
    match format::format_output(&view, format) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
