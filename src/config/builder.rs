//! Programmatic scenario construction
//!
//! The builder only collects values; `build()` runs the same validation
//! pipeline as parsing raw input, so a built scenario obeys the same rules.

use serde_json::{Number, Value};
use std::path::PathBuf;
use std::time::Duration;

use super::raw::{Field, RawScenario};
use super::schema::{Objective, Parsed};
use super::validate::{parse_scenario, ValidationErrors};

/// Builder for [`ScenarioConfig`](super::ScenarioConfig)
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    raw: RawScenario,
    instances: Vec<String>,
}

impl ScenarioBuilder {
    fn set(mut self, field: Field, value: Value) -> Self {
        self.raw.insert(field.name().to_string(), value);
        self
    }

    pub fn objective(self, objective: Objective) -> Self {
        self.set(Field::Objective, Value::from(objective.as_str()))
    }

    pub fn crash_cost(self, cost: f64) -> Self {
        self.set(Field::CrashCost, float(cost))
    }

    pub fn wallclock_limit(self, limit: Duration) -> Self {
        self.set(Field::WallclockLimit, float(limit.as_secs_f64()))
    }

    pub fn run_cutoff(self, cutoff: Duration) -> Self {
        self.set(Field::RunCutoff, float(cutoff.as_secs_f64()))
    }

    pub fn run_limit(self, runs: u64) -> Self {
        self.set(Field::RunLimit, Value::from(runs))
    }

    /// Memory limit per evaluation, in MB
    pub fn memory_limit(self, megabytes: u64) -> Self {
        self.set(Field::MemoryLimit, Value::from(megabytes))
    }

    pub fn save_instantly(self, enabled: bool) -> Self {
        self.set(Field::SaveInstantly, Value::from(enabled))
    }

    pub fn deterministic(self, enabled: bool) -> Self {
        self.set(Field::Deterministic, Value::from(enabled))
    }

    pub fn abort_on_first_crash(self, enabled: bool) -> Self {
        self.set(Field::AbortOnFirstCrash, Value::from(enabled))
    }

    /// Append one problem instance
    pub fn instance(mut self, instance: impl Into<String>) -> Self {
        self.instances.push(instance.into());
        self
    }

    pub fn output_dir(self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into().display().to_string();
        self.set(Field::OutputDir, Value::from(dir))
    }

    /// Validate and build the scenario
    pub fn build(self) -> Result<Parsed, ValidationErrors> {
        let mut raw = self.raw;
        if !self.instances.is_empty() {
            raw.insert(Field::Instances.name().to_string(), Value::from(self.instances));
        }
        parse_scenario(&raw)
    }
}

// JSON numbers cannot hold NaN or infinities; keep them as text so they fail
// coercion instead of silently becoming null
fn float(x: f64) -> Value {
    Number::from_f64(x).map_or_else(|| Value::String(x.to_string()), Value::Number)
}
