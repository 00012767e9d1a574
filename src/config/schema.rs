//! Scenario schema definitions
//!
//! A `ScenarioConfig` is the normalized, validated form of one tuning run's
//! parameters. It can only be obtained through [`ScenarioConfig::parse`] (or the
//! builder, which routes through the same pipeline), so every instance upholds
//! the objective-conditional invariants.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use super::builder::ScenarioBuilder;
use super::raw::{Field, RawScenario};
use super::validate::{parse_scenario, ScenarioWarning, ValidationErrors};

/// What the optimizer minimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    /// Solution quality (loss) reported by each evaluation
    #[default]
    Quality,
    /// Wallclock runtime of each evaluation
    Runtime,
}

impl Objective {
    /// Every accepted objective, in canonical order
    pub const ALL: [Objective; 2] = [Objective::Quality, Objective::Runtime];

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Objective::Quality => "quality",
            Objective::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quality" => Ok(Objective::Quality),
            "runtime" => Ok(Objective::Runtime),
            _ => Err(format!("Unknown objective: {s}. Valid objectives: quality, runtime")),
        }
    }
}

/// An optional upper bound where absence means "no limit enforced"
///
/// Kept distinct from `Option` so that an unset limit can never be confused
/// with a limit of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit<T> {
    /// No limit is enforced
    Unbounded,
    /// At most this much
    AtMost(T),
}

impl<T> Limit<T> {
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Limit::Unbounded)
    }

    /// The bound, if any
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Limit::Unbounded => None,
            Limit::AtMost(v) => Some(v),
        }
    }
}

impl<T: Copy> Limit<T> {
    pub fn value(&self) -> Option<T> {
        self.as_option().copied()
    }
}

impl<T> Default for Limit<T> {
    fn default() -> Self {
        Limit::Unbounded
    }
}

impl<T> From<Option<T>> for Limit<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Limit::Unbounded, Limit::AtMost)
    }
}

/// Validated scenario for one tuning run
///
/// Immutable once constructed; share it by reference (or `Arc`) with every
/// consumer of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub(crate) objective: Objective,
    pub(crate) crash_cost: Option<f64>,
    pub(crate) wallclock_limit: Limit<Duration>,
    pub(crate) run_cutoff: Option<Duration>,
    pub(crate) run_limit: Limit<u64>,
    pub(crate) memory_limit: Limit<u64>,
    pub(crate) save_instantly: bool,
    pub(crate) deterministic: bool,
    pub(crate) abort_on_first_crash: bool,
    pub(crate) instances: Vec<String>,
    pub(crate) output_dir: Option<PathBuf>,
}

impl ScenarioConfig {
    /// Parse and validate a raw key/value mapping
    ///
    /// Every violated rule is reported, not just the first one. Advisory
    /// findings (such as an unbounded run) are returned alongside the config.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tuning_scenario::{Objective, ScenarioConfig};
    ///
    /// let raw = json!({"objective": "quality", "crash_cost": 1000.0, "wallclock_limit": 3600});
    /// let parsed = ScenarioConfig::parse(raw.as_object().unwrap()).unwrap();
    ///
    /// assert_eq!(parsed.config().objective(), Objective::Quality);
    /// assert!(!parsed.config().is_unbounded_time());
    /// assert!(parsed.config().is_unbounded_runs());
    /// ```
    pub fn parse(raw: &RawScenario) -> Result<Parsed, ValidationErrors> {
        parse_scenario(raw)
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> ScenarioBuilder {
        ScenarioBuilder::default()
    }

    pub const fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost assigned to a crashed evaluation (quality objectives only)
    pub const fn crash_cost(&self) -> Option<f64> {
        self.crash_cost
    }

    /// Overall time budget for the run
    pub const fn wallclock_limit(&self) -> Limit<Duration> {
        self.wallclock_limit
    }

    /// Maximum time allowed for a single evaluation
    pub const fn run_cutoff(&self) -> Option<Duration> {
        self.run_cutoff
    }

    /// Maximum number of evaluations
    pub const fn run_limit(&self) -> Limit<u64> {
        self.run_limit
    }

    /// Memory limit per evaluation, in MB
    pub const fn memory_limit(&self) -> Limit<u64> {
        self.memory_limit
    }

    pub const fn save_instantly(&self) -> bool {
        self.save_instantly
    }

    pub const fn deterministic(&self) -> bool {
        self.deterministic
    }

    pub const fn abort_on_first_crash(&self) -> bool {
        self.abort_on_first_crash
    }

    /// Problem instances the optimizer races configurations on
    pub fn instances(&self) -> &[String] {
        &self.instances
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// True iff no wallclock limit is set
    pub const fn is_unbounded_time(&self) -> bool {
        self.wallclock_limit.is_unbounded()
    }

    /// True iff no run limit is set
    pub const fn is_unbounded_runs(&self) -> bool {
        self.run_limit.is_unbounded()
    }

    /// Canonical raw form: every field under its canonical key, unbounded
    /// limits as explicit `null`, durations as float seconds.
    ///
    /// Parsing the result yields a config equal to `self`.
    pub fn to_raw(&self) -> RawScenario {
        let mut raw = RawScenario::new();
        raw.insert(Field::Objective.name().into(), Value::from(self.objective.as_str()));
        raw.insert(Field::CrashCost.name().into(), optional(self.crash_cost));
        raw.insert(
            Field::WallclockLimit.name().into(),
            optional(self.wallclock_limit.value().map(|d| d.as_secs_f64())),
        );
        raw.insert(
            Field::RunCutoff.name().into(),
            optional(self.run_cutoff.map(|d| d.as_secs_f64())),
        );
        raw.insert(Field::RunLimit.name().into(), optional(self.run_limit.value()));
        raw.insert(Field::MemoryLimit.name().into(), optional(self.memory_limit.value()));
        raw.insert(Field::SaveInstantly.name().into(), Value::from(self.save_instantly));
        raw.insert(Field::Deterministic.name().into(), Value::from(self.deterministic));
        raw.insert(
            Field::AbortOnFirstCrash.name().into(),
            Value::from(self.abort_on_first_crash),
        );
        raw.insert(Field::Instances.name().into(), Value::from(self.instances.clone()));
        raw.insert(
            Field::OutputDir.name().into(),
            optional(self.output_dir.as_ref().map(|p| p.display().to_string())),
        );
        raw
    }
}

fn optional<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

impl Serialize for ScenarioConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

/// Successful parse: the validated config plus any advisory warnings
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub(crate) config: ScenarioConfig,
    pub(crate) warnings: Vec<ScenarioWarning>,
}

impl Parsed {
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn warnings(&self) -> &[ScenarioWarning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Drop the warnings and keep the config
    pub fn into_config(self) -> ScenarioConfig {
        self.config
    }
}
