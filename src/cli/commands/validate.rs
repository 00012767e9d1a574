//! Validate command implementation

use std::time::Duration;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{Limit, ScenarioConfig, ValidateArgs};
use crate::error::Result;

fn describe_duration(limit: Limit<Duration>) -> String {
    match limit {
        Limit::Unbounded => "unbounded".to_string(),
        Limit::AtMost(d) => format!("{}s", d.as_secs_f64()),
    }
}

fn describe_count(limit: Limit<u64>, unit: &str) -> String {
    match limit {
        Limit::Unbounded => "unbounded".to_string(),
        Limit::AtMost(n) => format!("{n}{unit}"),
    }
}

/// Format objective and crash handling as a string
pub fn format_objective_info(config: &ScenarioConfig) -> String {
    let mut lines = vec![format!("  Objective: {}", config.objective())];
    if let Some(cost) = config.crash_cost() {
        lines.push(format!("  Crash cost: {cost}"));
    }
    if config.abort_on_first_crash() {
        lines.push("  Abort on first crash: yes".to_string());
    }
    lines.join("\n")
}

/// Format time, run and memory limits as a string
pub fn format_limits_info(config: &ScenarioConfig) -> String {
    let cutoff = config
        .run_cutoff()
        .map_or_else(|| "none".to_string(), |d| format!("{}s", d.as_secs_f64()));
    [
        format!("  Wallclock limit: {}", describe_duration(config.wallclock_limit())),
        format!("  Run cutoff: {cutoff}"),
        format!("  Run limit: {}", describe_count(config.run_limit(), "")),
        format!("  Memory limit: {}", describe_count(config.memory_limit(), " MB")),
    ]
    .join("\n")
}

/// Format run options as a string
pub fn format_options_info(config: &ScenarioConfig) -> String {
    let mut lines = vec![
        format!("  Deterministic: {}", config.deterministic()),
        format!("  Save instantly: {}", config.save_instantly()),
    ];
    if !config.instances().is_empty() {
        lines.push(format!("  Instances: {}", config.instances().join(", ")));
    }
    if let Some(dir) = config.output_dir() {
        lines.push(format!("  Output dir: {}", dir.display()));
    }
    lines.join("\n")
}

/// Print detailed scenario summary
pub fn print_detailed_summary(config: &ScenarioConfig) {
    println!();
    println!("Scenario Summary:");
    println!("{}", format_objective_info(config));
    println!();
    println!("{}", format_limits_info(config));
    println!();
    println!("{}", format_options_info(config));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating scenario: {}", args.config.display()),
    );

    let parsed = super::load(&args.config, &args.overrides, level)?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(parsed.config());
    }

    Ok(())
}
