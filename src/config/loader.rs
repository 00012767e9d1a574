//! Scenario file loading
//!
//! Reads YAML or JSON scenario files into the raw mapping and applies
//! `key=value` overrides before handing everything to the validator.

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::raw::{Field, RawScenario};
use super::schema::{Parsed, ScenarioConfig};
use crate::error::{Error, Result};

/// Read a scenario file into its raw mapping
///
/// `.json` files are decoded as JSON, anything else as YAML. An empty
/// document yields an empty mapping.
pub fn load_raw<P: AsRef<Path>>(path: P) -> Result<RawScenario> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("reading scenario file: {}", path.display()), e))?;
    parse_document(&content, path)
}

fn parse_document(content: &str, path: &Path) -> Result<RawScenario> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let document: Value = if is_json {
        serde_json::from_str(content).map_err(|e| parsing(path, e.to_string()))?
    } else {
        serde_yaml::from_str(content).map_err(|e| parsing(path, e.to_string()))?
    };

    match document {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(RawScenario::new()),
        other => Err(parsing(path, format!("expected a mapping at top level, got {other}"))),
    }
}

fn parsing(path: &Path, message: String) -> Error {
    Error::ConfigParsing { path: path.to_path_buf(), message }
}

/// Apply `key=value` overrides on top of a raw mapping
///
/// Values stay strings and are coerced during validation. An override
/// replaces every existing spelling of the same field; an empty value unsets
/// it.
pub fn apply_overrides<S: AsRef<str>>(raw: &mut RawScenario, overrides: &[S]) -> Result<()> {
    for pair in overrides {
        let pair = pair.as_ref();
        let Some((key, value)) = pair.split_once('=') else {
            return Err(Error::Override { pair: pair.to_string() });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::Override { pair: pair.to_string() });
        }

        if let Some(field) = Field::from_key(key) {
            raw.retain(|existing, _| Field::from_key(existing) != Some(field));
        }
        let value = value.trim();
        let value = if value.is_empty() { Value::Null } else { Value::from(value) };
        tracing::debug!(key, %value, "scenario override");
        raw.insert(key.to_string(), value);
    }
    Ok(())
}

/// Load, override and validate a scenario file
pub fn load_scenario<P: AsRef<Path>, S: AsRef<str>>(path: P, overrides: &[S]) -> Result<Parsed> {
    let mut raw = load_raw(path)?;
    apply_overrides(&mut raw, overrides)?;
    Ok(ScenarioConfig::parse(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Limit, Objective};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::{Builder, NamedTempFile};

    const NO_OVERRIDES: &[&str] = &[];

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml_scenario() {
        let yaml = r"
objective: quality
crash_cost: 1000.0
wallclock_limit: 3600
deterministic: 'true'
";
        let file = temp_file(".yaml", yaml);
        let parsed = load_scenario(file.path(), NO_OVERRIDES).unwrap();
        let config = parsed.config();
        assert_eq!(config.objective(), Objective::Quality);
        assert!(config.deterministic());
        assert!(!config.is_unbounded_time());
    }

    #[test]
    fn test_load_json_scenario() {
        let json = r#"{"run_obj": "runtime", "cutoff": "15", "runcount_limit": 20}"#;
        let file = temp_file(".json", json);
        let parsed = load_scenario(file.path(), NO_OVERRIDES).unwrap();
        assert_eq!(parsed.config().run_cutoff(), Some(Duration::from_secs(15)));
        assert_eq!(parsed.config().run_limit(), Limit::AtMost(20));
    }

    #[test]
    fn test_empty_document_is_empty_mapping() {
        let file = temp_file(".yaml", "");
        assert!(load_raw(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_non_mapping_document_rejected() {
        let file = temp_file(".yaml", "- 1\n- 2\n");
        let err = load_raw(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParsing { .. }));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let file = temp_file(".yaml", "this is not valid yaml: [}");
        assert!(matches!(load_raw(file.path()), Err(Error::ConfigParsing { .. })));
    }

    #[test]
    fn test_nonexistent_file() {
        let err = load_raw("/nonexistent/path/to/scenario.yaml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_invalid_scenario_surfaces_all_errors() {
        let file = temp_file(".yaml", "objective: runtime\nrun_limit: 0\n");
        let err = load_scenario(file.path(), NO_OVERRIDES).unwrap_err();
        match err {
            Error::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn test_overrides_replace_aliases() {
        let mut raw = RawScenario::new();
        raw.insert("cutoff".into(), Value::from(10));
        raw.insert("crash_cost".into(), Value::from(1));
        apply_overrides(&mut raw, &["run_cutoff=20", "run_limit = 5"]).unwrap();

        assert!(!raw.contains_key("cutoff"));
        assert_eq!(raw["run_cutoff"], Value::from("20"));
        let parsed = ScenarioConfig::parse(&raw).unwrap();
        assert_eq!(parsed.config().run_cutoff(), Some(Duration::from_secs(20)));
        assert_eq!(parsed.config().run_limit(), Limit::AtMost(5));
    }

    #[test]
    fn test_empty_override_unsets_field() {
        let mut raw = RawScenario::new();
        raw.insert("run_limit".into(), Value::from(10));
        apply_overrides(&mut raw, &["run_limit="]).unwrap();
        assert_eq!(raw["run_limit"], Value::Null);
    }

    #[test]
    fn test_malformed_override() {
        let mut raw = RawScenario::new();
        assert!(matches!(
            apply_overrides(&mut raw, &["run_limit"]),
            Err(Error::Override { .. })
        ));
        assert!(matches!(apply_overrides(&mut raw, &["=5"]), Err(Error::Override { .. })));
    }
}
