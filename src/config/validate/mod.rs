//! Scenario validation
//!
//! Turns a raw mapping into a validated `ScenarioConfig`, reporting every
//! violated rule in one pass.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::{ErrorKind, ScenarioWarning, ValidationError, ValidationErrors};
pub use validator::parse_scenario;
