//! Optimizer argument export
//!
//! Flattens a validated scenario into the key/value arguments an SMAC-style
//! optimizer expects. Unbounded limits and unset options are omitted rather
//! than written as zero.

use serde_json::Value;

use super::raw::RawScenario;
use super::schema::{Objective, ScenarioConfig};

// Optimizer-side argument keys
const ARG_RUN_OBJ: &str = "run_obj";
const ARG_COST_FOR_CRASH: &str = "cost_for_crash";
const ARG_CUTOFF: &str = "cutoff";
const ARG_WALLCLOCK_LIMIT: &str = "wallclock_limit";
const ARG_RUNCOUNT_LIMIT: &str = "runcount_limit";
const ARG_MEMORY_LIMIT: &str = "memory_limit";
const ARG_DETERMINISTIC: &str = "deterministic";
const ARG_ABORT_ON_FIRST_CRASH: &str = "abort_on_first_crash";
const ARG_SAVE_INSTANTLY: &str = "save-results-instantly";
const ARG_INSTANCES: &str = "instances";
const ARG_OUTPUT_DIR: &str = "output_dir";

impl ScenarioConfig {
    /// Scenario arguments for the optimizer
    pub fn to_optimizer_args(&self) -> RawScenario {
        let mut args = RawScenario::new();
        args.insert(ARG_RUN_OBJ.into(), Value::from(self.objective.as_str()));

        if self.objective == Objective::Quality {
            if let Some(cost) = self.crash_cost {
                args.insert(ARG_COST_FOR_CRASH.into(), Value::from(cost));
            }
        }
        if let Some(cutoff) = self.run_cutoff {
            args.insert(ARG_CUTOFF.into(), Value::from(cutoff.as_secs_f64()));
        }
        if let Some(limit) = self.wallclock_limit.value() {
            args.insert(ARG_WALLCLOCK_LIMIT.into(), Value::from(limit.as_secs_f64()));
        }
        if let Some(runs) = self.run_limit.value() {
            args.insert(ARG_RUNCOUNT_LIMIT.into(), Value::from(runs));
        }
        if let Some(mb) = self.memory_limit.value() {
            args.insert(ARG_MEMORY_LIMIT.into(), Value::from(mb));
        }

        args.insert(ARG_DETERMINISTIC.into(), Value::from(self.deterministic));
        args.insert(ARG_ABORT_ON_FIRST_CRASH.into(), Value::from(self.abort_on_first_crash));
        args.insert(ARG_SAVE_INSTANTLY.into(), Value::from(self.save_instantly));

        if !self.instances.is_empty() {
            args.insert(ARG_INSTANCES.into(), Value::from(self.instances.clone()));
        }
        if let Some(dir) = &self.output_dir {
            args.insert(ARG_OUTPUT_DIR.into(), Value::from(dir.display().to_string()));
        }
        args
    }
}
