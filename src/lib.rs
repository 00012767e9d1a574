//! # tuning-scenario
//!
//! Scenario configuration for automated ML tuning runs: the parameters that
//! govern how long a search may run, how crashed evaluations are costed, what
//! bounds each evaluation, and whether the optimizer targets solution quality
//! or runtime.
//!
//! A raw key/value mapping goes in; either a validated, immutable
//! [`ScenarioConfig`] (plus advisory warnings) or the full list of violated
//! rules comes out.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use tuning_scenario::{Objective, ScenarioConfig};
//!
//! let parsed = ScenarioConfig::builder()
//!     .objective(Objective::Runtime)
//!     .run_cutoff(Duration::from_secs(30))
//!     .run_limit(200)
//!     .build()?;
//!
//! assert!(parsed.config().is_unbounded_time());
//! assert!(!parsed.config().is_unbounded_runs());
//! # Ok::<(), tuning_scenario::ValidationErrors>(())
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;

pub use config::{
    load_scenario, Field, Limit, Objective, Parsed, RawScenario, ScenarioBuilder, ScenarioConfig,
    ScenarioWarning, ValidationError, ValidationErrors,
};
pub use error::{Error, Result};
