//! Scenario parsing and validation logic
//!
//! Runs a single pass over the raw mapping and collects every violation:
//! 1. Key resolution (aliases, duplicates, unknown keys) and field coercion
//! 2. Objective enum check
//! 3. Objective-conditional requiredness
//! 4. Positivity of costs, durations and limits
//! 5. Termination-boundedness warning

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{ScenarioWarning, ValidationError, ValidationErrors};
use crate::config::coerce;
use crate::config::raw::{Field, RawScenario};
use crate::config::schema::{Limit, Objective, Parsed, ScenarioConfig};

const CRASH_COST_IGNORED: &str = "crash cost only applies to quality objectives";

/// State of one field after coercion
#[derive(Debug, Clone, PartialEq)]
enum Slot<T> {
    Absent,
    Present(T),
    /// Coercion failed and was already reported
    Invalid,
}

impl<T> Slot<T> {
    fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }

    fn present(self) -> Option<T> {
        match self {
            Slot::Present(v) => Some(v),
            Slot::Absent | Slot::Invalid => None,
        }
    }
}

/// Accumulates findings for one pass
#[derive(Default)]
struct Report {
    errors: ValidationErrors,
    warnings: Vec<ScenarioWarning>,
}

impl Report {
    fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn warn(&mut self, warning: ScenarioWarning) {
        self.warnings.push(warning);
    }
}

/// Parse, validate and normalize a raw scenario mapping
pub fn parse_scenario(raw: &RawScenario) -> Result<Parsed, ValidationErrors> {
    let mut report = Report::default();
    let fields = resolve_keys(raw, &mut report);

    let objective_text = read(&fields, Field::Objective, "text", coerce::to_text, &mut report);
    let crash_cost = read(&fields, Field::CrashCost, "number", coerce::to_float, &mut report);
    let wallclock = read(&fields, Field::WallclockLimit, "seconds", coerce::to_float, &mut report);
    let run_cutoff = read(&fields, Field::RunCutoff, "seconds", coerce::to_float, &mut report);
    let run_limit = read(&fields, Field::RunLimit, "integer", coerce::to_integer, &mut report);
    let memory_limit =
        read(&fields, Field::MemoryLimit, "integer (MB)", coerce::to_integer, &mut report);
    let save_instantly = flag(&fields, Field::SaveInstantly, &mut report);
    let deterministic = flag(&fields, Field::Deterministic, &mut report);
    let abort_on_first_crash = flag(&fields, Field::AbortOnFirstCrash, &mut report);
    let instances =
        read(&fields, Field::Instances, "list of strings", coerce::to_text_list, &mut report)
            .present()
            .unwrap_or_default();
    let output_dir = read(&fields, Field::OutputDir, "path", coerce::to_text, &mut report)
        .present()
        .map(PathBuf::from);

    // Stage 1: objective must be a known value
    let objective = match objective_text {
        Slot::Absent => Some(Objective::default()),
        Slot::Present(text) => match text.parse::<Objective>() {
            Ok(objective) => Some(objective),
            Err(_) => {
                report.error(ValidationError::InvalidEnumValue {
                    field: Field::Objective,
                    value: text,
                });
                None
            }
        },
        Slot::Invalid => None,
    };

    // Stage 2: requiredness depends on the objective; skipped when it is unknown.
    // crash_cost only has meaning once the objective is known.
    let crash_cost = match objective {
        Some(Objective::Quality) => {
            if crash_cost.is_absent() {
                report.error(ValidationError::MissingRequiredField {
                    field: Field::CrashCost,
                    objective: Objective::Quality,
                });
            }
            crash_cost
        }
        Some(Objective::Runtime) => {
            if run_cutoff.is_absent() {
                report.error(ValidationError::MissingRequiredField {
                    field: Field::RunCutoff,
                    objective: Objective::Runtime,
                });
            }
            if !crash_cost.is_absent() {
                report.warn(ScenarioWarning::IgnoredField {
                    field: Field::CrashCost,
                    reason: CRASH_COST_IGNORED,
                });
            }
            Slot::Absent
        }
        None => Slot::Absent,
    };

    // Stage 3: positivity
    let crash_cost = positive(Field::CrashCost, crash_cost, &mut report);
    let wallclock = positive(Field::WallclockLimit, wallclock, &mut report)
        .and_then(|secs| duration(Field::WallclockLimit, secs, &mut report));
    let run_cutoff = positive(Field::RunCutoff, run_cutoff, &mut report)
        .and_then(|secs| duration(Field::RunCutoff, secs, &mut report));
    let run_limit = positive_count(Field::RunLimit, run_limit, &mut report);
    let memory_limit = positive_count(Field::MemoryLimit, memory_limit, &mut report);

    let Some(objective) = objective else {
        return Err(report.errors);
    };
    if !report.errors.is_empty() {
        tracing::debug!(errors = report.errors.len(), "scenario rejected");
        return Err(report.errors);
    }

    let config = ScenarioConfig {
        objective,
        crash_cost,
        wallclock_limit: Limit::from(wallclock),
        run_cutoff,
        run_limit: Limit::from(run_limit),
        memory_limit: Limit::from(memory_limit),
        save_instantly,
        deterministic,
        abort_on_first_crash,
        instances,
        output_dir,
    };

    // Stage 4: termination is advisory
    if config.is_unbounded_time() && config.is_unbounded_runs() {
        report.warn(ScenarioWarning::UnboundedTermination);
    }

    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }
    tracing::debug!(
        objective = %config.objective,
        unbounded_time = config.is_unbounded_time(),
        unbounded_runs = config.is_unbounded_runs(),
        "scenario validated"
    );

    Ok(Parsed { config, warnings: report.warnings })
}

/// Map raw keys onto fields, dropping `null`s as absent
fn resolve_keys<'a>(raw: &'a RawScenario, report: &mut Report) -> BTreeMap<Field, &'a Value> {
    let mut seen: BTreeMap<Field, Vec<(&'a str, &'a Value)>> = BTreeMap::new();
    for (key, value) in raw {
        match Field::from_key(key) {
            Some(field) if !value.is_null() => {
                seen.entry(field).or_default().push((key.as_str(), value));
            }
            Some(_) => {}
            None => report.warn(ScenarioWarning::UnknownField { key: key.clone() }),
        }
    }

    let mut fields = BTreeMap::new();
    for (field, entries) in seen {
        if let [(_, value)] = entries.as_slice() {
            fields.insert(field, *value);
        } else {
            let keys = entries.iter().map(|(k, _)| (*k).to_string()).collect();
            report.error(ValidationError::DuplicateField { field, keys });
        }
    }
    fields
}

fn read<T>(
    fields: &BTreeMap<Field, &Value>,
    field: Field,
    expected: &'static str,
    convert: fn(&Value) -> Option<T>,
    report: &mut Report,
) -> Slot<T> {
    let Some(value) = fields.get(&field) else {
        return Slot::Absent;
    };
    match convert(value) {
        Some(v) => Slot::Present(v),
        None => {
            report.error(ValidationError::Coercion { field, expected, found: value.to_string() });
            Slot::Invalid
        }
    }
}

fn flag(fields: &BTreeMap<Field, &Value>, field: Field, report: &mut Report) -> bool {
    read(fields, field, "boolean", coerce::to_bool, report).present().unwrap_or(false)
}

fn positive(field: Field, slot: Slot<f64>, report: &mut Report) -> Option<f64> {
    let value = slot.present()?;
    if value > 0.0 {
        Some(value)
    } else {
        report.error(ValidationError::NonPositiveValue { field, value });
        None
    }
}

fn positive_count(field: Field, slot: Slot<i128>, report: &mut Report) -> Option<u64> {
    let value = slot.present()?;
    if value <= 0 {
        report.error(ValidationError::NonPositiveValue { field, value: value as f64 });
        return None;
    }
    match u64::try_from(value) {
        Ok(count) => Some(count),
        Err(_) => {
            report.error(ValidationError::Coercion {
                field,
                expected: "integer up to u64::MAX",
                found: value.to_string(),
            });
            None
        }
    }
}

fn duration(field: Field, secs: f64, report: &mut Report) -> Option<Duration> {
    match Duration::try_from_secs_f64(secs) {
        Ok(d) if !d.is_zero() => Some(d),
        _ => {
            report.error(ValidationError::Coercion {
                field,
                expected: "duration between 1ns and u64::MAX seconds",
                found: secs.to_string(),
            });
            None
        }
    }
}
