//! Error types with actionable diagnostics
//!
//! Wraps everything that can go wrong around the core parser: reading the
//! scenario file, decoding it, and applying command-line overrides.

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationErrors;

/// Result type alias for tuning-scenario operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// IO error with context
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Scenario file has invalid syntax or is not a mapping
    #[error("Invalid scenario syntax in {path}:\n  {message}\n  → Check YAML/JSON syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Malformed `key=value` override
    #[error("Invalid override '{pair}'\n  → Use the form key=value, e.g. run_limit=100")]
    Override { pair: String },

    /// Scenario failed validation
    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationErrors),

    /// Rendering a scenario for output failed
    #[error("{format} serialization error: {message}")]
    Serialization { format: &'static str, message: String },
}

impl Error {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    pub fn serialization(format: &'static str, err: impl Display) -> Self {
        Self::Serialization { format, message: err.to_string() }
    }

    /// Check if this error is user-recoverable
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigParsing { .. } | Self::Override { .. } | Self::Invalid(_)
        )
    }

    /// Error code for structured output
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::Override { .. } => "E003",
            Self::Invalid(_) => "E010",
            Self::Serialization { .. } => "E020",
        }
    }
}
