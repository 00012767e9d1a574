//! Info command implementation

use super::validate::{format_limits_info, format_objective_info, format_options_info};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::InfoArgs;
use crate::error::Result;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<()> {
    let parsed = super::load(&args.config, &args.overrides, level)?;
    let config = parsed.config();

    match args.format.serialize(config)? {
        Some(rendered) => println!("{rendered}"),
        None => {
            log(level, LogLevel::Normal, "Scenario Info:");
            println!();
            println!("{}", format_objective_info(config));
            println!("{}", format_limits_info(config));
            println!("{}", format_options_info(config));
        }
    }

    Ok(())
}
