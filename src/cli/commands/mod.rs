//! CLI command implementations

mod export;
mod info;
mod validate;


use crate::cli::logging::warn;
use crate::cli::LogLevel;
use crate::config::{load_scenario, Cli, Command, Parsed};
use crate::error::Result;
use std::path::Path;

/// Output level selected by the verbose/quiet flags
pub fn log_level(cli: &Cli) -> LogLevel {
    if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    }
}

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = log_level(&cli);

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Export(args) => export::run_export(args, log_level),
    }
}

/// Load a scenario and surface its warnings
fn load(config: &Path, overrides: &[String], level: LogLevel) -> Result<Parsed> {
    let parsed = load_scenario(config, overrides)?;

    for warning in parsed.warnings() {
        warn(level, &warning.to_string());
    }
    Ok(parsed)
}
