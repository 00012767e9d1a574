//! Raw, loosely-typed scenario input and field key resolution

use std::fmt;

/// Format-agnostic scenario input: string keys to loosely-typed values
///
/// YAML, JSON, CLI overrides and programmatic callers all converge on this
/// shape before validation.
pub type RawScenario = serde_json::Map<String, serde_json::Value>;

/// A recognized scenario field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Objective,
    CrashCost,
    WallclockLimit,
    RunCutoff,
    RunLimit,
    MemoryLimit,
    SaveInstantly,
    Deterministic,
    AbortOnFirstCrash,
    Instances,
    OutputDir,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Objective,
        Field::CrashCost,
        Field::WallclockLimit,
        Field::RunCutoff,
        Field::RunLimit,
        Field::MemoryLimit,
        Field::SaveInstantly,
        Field::Deterministic,
        Field::AbortOnFirstCrash,
        Field::Instances,
        Field::OutputDir,
    ];

    /// Canonical key
    pub const fn name(self) -> &'static str {
        match self {
            Field::Objective => "objective",
            Field::CrashCost => "crash_cost",
            Field::WallclockLimit => "wallclock_limit",
            Field::RunCutoff => "run_cutoff",
            Field::RunLimit => "run_limit",
            Field::MemoryLimit => "memory_limit",
            Field::SaveInstantly => "save_instantly",
            Field::Deterministic => "deterministic",
            Field::AbortOnFirstCrash => "abort_on_first_crash",
            Field::Instances => "instances",
            Field::OutputDir => "output_dir",
        }
    }

    /// Optimizer-side spellings accepted besides the canonical key
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Objective => &["run_obj"],
            Field::CrashCost => &["cost_for_crash"],
            Field::RunCutoff => &["cutoff", "cutoff_time"],
            Field::RunLimit => &["runcount_limit"],
            Field::MemoryLimit => &["memory"],
            Field::SaveInstantly => &["save_results_instantly"],
            Field::AbortOnFirstCrash => &["abort_on_crash"],
            Field::WallclockLimit
            | Field::Deterministic
            | Field::Instances
            | Field::OutputDir => &[],
        }
    }

    /// Resolve a raw key to its field
    ///
    /// Case, surrounding whitespace and `-` versus `_` are not significant.
    pub fn from_key(key: &str) -> Option<Field> {
        let key = normalize_key(key);
        Field::ALL
            .into_iter()
            .find(|field| field.name() == key || field.aliases().contains(&key.as_str()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('-', "_")
}
