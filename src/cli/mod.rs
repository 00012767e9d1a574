//! CLI module for tuning-scenario
//!
//! Command handlers and output helpers for the `tuning-scenario` binary.

mod commands;
mod logging;

pub use commands::{log_level, run_command};
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
