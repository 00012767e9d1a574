//! Property-based tests for scenario validation

use super::error::{ErrorKind, ValidationError};
use super::validator::parse_scenario;
use crate::config::raw::{Field, RawScenario};
use crate::config::schema::Objective;
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_limits() -> impl Strategy<Value = (Option<f64>, Option<u64>)> {
    (proptest::option::of(1.0f64..1e6), proptest::option::of(1u64..100_000))
}

fn insert_limits(raw: &mut RawScenario, wallclock: Option<f64>, runs: Option<u64>) {
    if let Some(w) = wallclock {
        raw.insert("wallclock_limit".into(), json!(w));
    }
    if let Some(r) = runs {
        raw.insert("run_limit".into(), json!(r));
    }
}

fn arb_quality_raw() -> impl Strategy<Value = RawScenario> {
    (1e-3f64..1e9, arb_limits(), any::<bool>(), any::<bool>()).prop_map(
        |(crash_cost, (wallclock, runs), save, det)| {
            let mut raw = RawScenario::new();
            raw.insert("objective".into(), json!("quality"));
            raw.insert("crash_cost".into(), json!(crash_cost));
            raw.insert("save_instantly".into(), json!(save));
            raw.insert("deterministic".into(), json!(det));
            insert_limits(&mut raw, wallclock, runs);
            raw
        },
    )
}

fn arb_bad_objective() -> impl Strategy<Value = String> {
    "[a-z]{1,12}".prop_filter("must not be a known objective", |s| {
        s != "quality" && s != "runtime"
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_quality_passes(raw in arb_quality_raw()) {
        let parsed = parse_scenario(&raw).unwrap();
        prop_assert_eq!(parsed.config().objective(), Objective::Quality);
    }

    #[test]
    fn prop_runtime_missing_cutoff_fails(
        (wallclock, runs) in arb_limits(),
        crash_cost in proptest::option::of(-10.0f64..10.0)
    ) {
        let mut raw = RawScenario::new();
        raw.insert("objective".into(), json!("runtime"));
        if let Some(c) = crash_cost {
            raw.insert("crash_cost".into(), json!(c));
        }
        insert_limits(&mut raw, wallclock, runs);

        let errors = parse_scenario(&raw).unwrap_err();
        prop_assert!(errors.contains(Field::RunCutoff, ErrorKind::MissingRequiredField));
    }

    #[test]
    fn prop_runtime_non_positive_cutoff_fails(
        cutoff in -1e6f64..=0.0,
        (wallclock, runs) in arb_limits()
    ) {
        let mut raw = RawScenario::new();
        raw.insert("objective".into(), json!("runtime"));
        raw.insert("run_cutoff".into(), json!(cutoff));
        insert_limits(&mut raw, wallclock, runs);

        let errors = parse_scenario(&raw).unwrap_err();
        prop_assert!(errors.contains(Field::RunCutoff, ErrorKind::NonPositiveValue));
    }

    #[test]
    fn prop_unknown_objective_only_enum_error(
        raw in arb_quality_raw(),
        objective in arb_bad_objective(),
        crash_cost in -1000.0f64..1000.0
    ) {
        let mut raw = raw;
        raw.insert("objective".into(), Value::String(objective.clone()));
        raw.insert("crash_cost".into(), json!(crash_cost));

        let errors = parse_scenario(&raw).unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        let is_enum_error = matches!(
            &errors.errors()[0],
            ValidationError::InvalidEnumValue { field: Field::Objective, value } if *value == objective
        );
        prop_assert!(is_enum_error);
    }

    #[test]
    fn prop_parse_idempotent(raw in arb_quality_raw(), cutoff in proptest::option::of(-5.0f64..5.0)) {
        let mut raw = raw;
        if let Some(c) = cutoff {
            raw.insert("run_cutoff".into(), json!(c));
        }
        prop_assert_eq!(parse_scenario(&raw), parse_scenario(&raw));
    }

    #[test]
    fn prop_non_positive_run_limit_fails(raw in arb_quality_raw(), limit in -1000i64..=0) {
        let mut raw = raw;
        raw.insert("run_limit".into(), json!(limit));
        let errors = parse_scenario(&raw).unwrap_err();
        prop_assert!(errors.contains(Field::RunLimit, ErrorKind::NonPositiveValue));
    }

    #[test]
    fn prop_unbounded_flags_track_limits((wallclock, runs) in arb_limits()) {
        let mut raw = RawScenario::new();
        raw.insert("crash_cost".into(), json!(1.0));
        insert_limits(&mut raw, wallclock, runs);

        let parsed = parse_scenario(&raw).unwrap();
        prop_assert_eq!(parsed.config().is_unbounded_time(), wallclock.is_none());
        prop_assert_eq!(parsed.config().is_unbounded_runs(), runs.is_none());
        prop_assert_eq!(parsed.has_warnings(), wallclock.is_none() && runs.is_none());
    }

    #[test]
    fn prop_canonical_form_reparses(raw in arb_quality_raw()) {
        let parsed = parse_scenario(&raw).unwrap();
        let again = parse_scenario(&parsed.config().to_raw()).unwrap();
        prop_assert_eq!(again.config(), parsed.config());
    }
}
