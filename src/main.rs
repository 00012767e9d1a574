//! tuning-scenario CLI
//!
//! # Usage
//!
//! ```bash
//! # Check a scenario and list every problem
//! tuning-scenario validate scenario.yaml
//!
//! # Try a fix without editing the file
//! tuning-scenario validate scenario.yaml --set run_cutoff=30
//!
//! # Show the normalized scenario
//! tuning-scenario info scenario.yaml --format yaml
//!
//! # Arguments handed to the optimizer
//! tuning-scenario export scenario.yaml
//! ```

use clap::Parser;
use std::process::ExitCode;
use tuning_scenario::cli::{log_level, run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = log_level(&cli);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.filter_directive())),
        )
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.code());
            if e.is_user_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::from(2)
            }
        }
    }
}
