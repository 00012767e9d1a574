//! Output format for the info and export commands.

use serde::Serialize;

use crate::error::{Error, Result};

/// How `info` and `export` print a scenario
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Human-readable summary for `info`, `key = value` lines for `export`
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
    /// YAML mapping, loadable again as a scenario file
    Yaml,
}

impl OutputFormat {
    /// Serialize `value` for the structured formats
    ///
    /// Returns `None` for [`OutputFormat::Text`]; each command lays out its
    /// own text form.
    pub fn serialize<T: Serialize + ?Sized>(self, value: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map(Some)
                .map_err(|e| Error::serialization("JSON", e)),
            OutputFormat::Yaml => serde_yaml::to_string(value)
                .map(Some)
                .map_err(|e| Error::serialization("YAML", e)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn test_output_format_invalid() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("xml"));
        assert!(err.contains("text, json, yaml"));
    }

    #[test]
    fn test_text_is_left_to_the_command() {
        assert_eq!(OutputFormat::Text.serialize(&json!({"run_obj": "quality"})).unwrap(), None);
    }

    #[test]
    fn test_structured_formats_keep_key_order() {
        let args = json!({"run_obj": "runtime", "cutoff": 30.0});

        let json = OutputFormat::Json.serialize(&args).unwrap().unwrap();
        assert!(json.find("run_obj").unwrap() < json.find("cutoff").unwrap());

        let yaml = OutputFormat::Yaml.serialize(&args).unwrap().unwrap();
        assert_eq!(yaml, "run_obj: runtime\ncutoff: 30.0\n");
    }
}
