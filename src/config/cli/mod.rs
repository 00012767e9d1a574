//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! tuning-scenario validate scenario.yaml
//! tuning-scenario validate scenario.yaml --set run_limit=200 --detailed
//! tuning-scenario info scenario.yaml --format yaml
//! tuning-scenario export scenario.json
//! ```

mod core;
mod types;

pub use self::core::{parse_args, Cli, Command, ExportArgs, InfoArgs, ValidateArgs};
pub use types::OutputFormat;
