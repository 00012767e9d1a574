//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Default `tracing` filter directive for this level
    pub const fn filter_directive(self) -> &'static str {
        match self {
            LogLevel::Quiet | LogLevel::Normal => "error",
            LogLevel::Verbose => "debug",
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Print a message to stderr unless output is suppressed
pub fn warn(level: LogLevel, msg: &str) {
    if level != LogLevel::Quiet {
        eprintln!("Warning: {msg}");
    }
}
