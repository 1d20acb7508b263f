use clap::{CommandFactory, Parser, Subcommand};
use libwhenwords::{Timestamp, WhenError};
use libwhenwords::config::ColorChoice;

mod commands;
mod config;
mod context;
mod format;

/// whenwords - human-friendly time formatting
///
/// Turns Unix timestamps into relative times, durations and calendar
/// labels, and parses written durations back into seconds. Timestamps may
/// be Unix seconds (`1705276800`) or ISO-8601 (`2024-01-15T00:00:00Z`).
#[derive(Parser, Debug)]
#[command(name = "whenwords")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe a timestamp relative to now ("3 hours ago")
    Ago {
        /// Timestamp to describe
        #[arg(allow_negative_numbers = true, value_parser = parse_timestamp)]
        timestamp: Timestamp,
        /// Reference point (defaults to now)
        #[arg(short, long, allow_negative_numbers = true, value_parser = parse_timestamp)]
        reference: Option<Timestamp>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Format a number of seconds as a duration ("2 hours, 30 minutes")
    Duration {
        /// Number of seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
        /// Use abbreviated units ("2h 30m")
        #[arg(short, long, overrides_with = "no_compact")]
        compact: bool,
        /// Use full unit names even if the config asks for compact output
        #[arg(long, overrides_with = "compact")]
        no_compact: bool,
        /// Maximum number of units to show
        #[arg(short, long)]
        max_units: Option<usize>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Parse a written duration into seconds ("2h30m" -> 9000)
    Parse {
        /// Duration text
        text: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Label a date relative to today ("Yesterday", "Last Friday")
    Date {
        /// Timestamp to label
        #[arg(allow_negative_numbers = true, value_parser = parse_timestamp)]
        timestamp: Timestamp,
        /// Reference point (defaults to now)
        #[arg(short, long, allow_negative_numbers = true, value_parser = parse_timestamp)]
        reference: Option<Timestamp>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Format the span between two dates ("January 15–22, 2024")
    Range {
        /// First endpoint
        #[arg(allow_negative_numbers = true, value_parser = parse_timestamp)]
        start: Timestamp,
        /// Second endpoint
        #[arg(allow_negative_numbers = true, value_parser = parse_timestamp)]
        end: Timestamp,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Display version information
    Version {
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Initialize configuration with default values
    Init,
    /// Display the effective configuration
    Get {
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
}

/// Reads a timestamp argument as Unix seconds, fractional seconds or ISO-8601
fn parse_timestamp(s: &str) -> Result<Timestamp, WhenError> {
    s.parse::<Timestamp>()
}

/// Collapses `--compact`/`--no-compact` into an override of the configured value
fn compact_flag(compact: bool, no_compact: bool) -> Option<bool> {
    match (compact, no_compact) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    env_logger::Builder::new()
        .filter_level(verbosity.log_filter())
        .parse_default_env()
        .init();

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(cli.color.as_deref().map(ColorChoice::from), verbosity);

    match cli.command {
        Commands::Ago {
            timestamp,
            reference,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_ago(&ctx, timestamp, reference, fmt);
        }
        Commands::Duration {
            seconds,
            compact,
            no_compact,
            max_units,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            let compact = compact_flag(compact, no_compact);
            commands::duration::handle_duration(&ctx, seconds, compact, max_units, fmt);
        }
        Commands::Parse { text, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::duration::handle_parse(&ctx, &text, fmt);
        }
        Commands::Date {
            timestamp,
            reference,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_date(&ctx, timestamp, reference, fmt);
        }
        Commands::Range { start, end, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_range(&ctx, start, end, fmt);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::handle_init(&ctx),
            ConfigCommands::Get { format } => {
                let fmt = ctx.output_format(format.as_deref());
                commands::config::handle_get(&ctx, fmt);
            }
        },
        Commands::Version { format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::version::handle_version(&ctx, fmt);
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
