//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// tuning-scenario: validate and inspect scenarios for automated tuning runs
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tuning-scenario")]
#[command(version)]
#[command(about = "Validate, inspect and export scenario configurations for tuning runs")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a scenario file and report every problem
    Validate(ValidateArgs),

    /// Display the normalized scenario
    Info(InfoArgs),

    /// Print the arguments handed to the optimizer
    Export(ExportArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML or JSON scenario file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override a field (repeatable), e.g. --set run_limit=100
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Show detailed scenario summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML or JSON scenario file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override a field (repeatable), e.g. --set run_limit=100
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the export command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ExportArgs {
    /// Path to YAML or JSON scenario file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override a field (repeatable), e.g. --set run_limit=100
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
