//! Scenario configuration
//!
//! Parsing, validation and normalization of tuning-run scenarios, plus the
//! file loader and CLI argument types layered on top.

mod builder;
pub mod cli;
mod coerce;
mod export;
mod loader;
mod raw;
mod schema;
pub mod validate;

pub use builder::ScenarioBuilder;
pub use cli::{parse_args, Cli, Command, ExportArgs, InfoArgs, OutputFormat, ValidateArgs};
pub use loader::{apply_overrides, load_raw, load_scenario};
pub use raw::{Field, RawScenario};
pub use schema::{Limit, Objective, Parsed, ScenarioConfig};
pub use validate::{ErrorKind, ScenarioWarning, ValidationError, ValidationErrors};
