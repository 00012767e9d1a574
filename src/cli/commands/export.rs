//! Export command implementation

use crate::cli::LogLevel;
use crate::config::{ExportArgs, RawScenario};
use crate::error::Result;

/// Render optimizer arguments as `key = value` lines
pub fn format_args_text(args: &RawScenario) -> String {
    args.iter().map(|(key, value)| format!("{key} = {value}")).collect::<Vec<_>>().join("\n")
}

pub fn run_export(args: ExportArgs, level: LogLevel) -> Result<()> {
    let parsed = super::load(&args.config, &args.overrides, level)?;
    let optimizer_args = parsed.config().to_optimizer_args();

    let rendered = match args.format.serialize(&optimizer_args)? {
        Some(rendered) => rendered,
        None => format_args_text(&optimizer_args),
    };
    println!("{rendered}");

    Ok(())
}
