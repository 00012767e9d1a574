//! Validation error and warning types
//!
//! Fatal problems are collected into a single [`ValidationErrors`] so callers
//! can report every issue at once. Advisory findings are [`ScenarioWarning`]s
//! and travel with a successful parse.

use thiserror::Error;

use crate::config::raw::Field;
use crate::config::schema::Objective;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Coercion,
    MissingRequiredField,
    InvalidEnumValue,
    NonPositiveValue,
    DuplicateField,
}

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Cannot read '{field}' as {expected}: got {found}")]
    Coercion {
        field: Field,
        expected: &'static str,
        found: String,
    },

    #[error("Missing '{field}' (required when objective is {objective})")]
    MissingRequiredField { field: Field, objective: Objective },

    #[error("Invalid value for '{field}': {value} (must be one of: quality, runtime)")]
    InvalidEnumValue { field: Field, value: String },

    #[error("Invalid '{field}': {value} (must be > 0)")]
    NonPositiveValue { field: Field, value: f64 },

    #[error("'{field}' given more than once via keys: {}", .keys.join(", "))]
    DuplicateField { field: Field, keys: Vec<String> },
}

impl ValidationError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Coercion { .. } => ErrorKind::Coercion,
            Self::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            Self::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
            Self::NonPositiveValue { .. } => ErrorKind::NonPositiveValue,
            Self::DuplicateField { .. } => ErrorKind::DuplicateField,
        }
    }

    /// Field the violation is attached to
    pub const fn field(&self) -> Field {
        match self {
            Self::Coercion { field, .. }
            | Self::MissingRequiredField { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::NonPositiveValue { field, .. }
            | Self::DuplicateField { field, .. } => *field,
        }
    }
}

/// Every rule violation found in one validation pass
#[derive(Debug, Clone, PartialEq, Default, Error)]
#[error("{}", render(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

fn render(errors: &[ValidationError]) -> String {
    let mut out = format!("scenario has {} validation error(s):", errors.len());
    for error in errors {
        out.push_str("\n  - ");
        out.push_str(&error.to_string());
    }
    out
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Violations attached to one field
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.field() == field)
    }

    /// Whether a violation of `kind` was recorded for `field`
    pub fn contains(&self, field: Field, kind: ErrorKind) -> bool {
        self.for_field(field).any(|e| e.kind() == kind)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Non-fatal finding attached to a successful parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioWarning {
    #[error("Neither wallclock_limit nor run_limit is set; the run may never terminate\n  → Set wallclock_limit (seconds) or run_limit (evaluations)")]
    UnboundedTermination,

    #[error("Ignoring '{field}': {reason}")]
    IgnoredField { field: Field, reason: &'static str },

    #[error("Ignoring unknown key '{key}'")]
    UnknownField { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_field() {
        let err = ValidationError::MissingRequiredField {
            field: Field::RunCutoff,
            objective: Objective::Runtime,
        };
        let msg = err.to_string();
        assert!(msg.contains("run_cutoff"));
        assert!(msg.contains("runtime"));

        let err = ValidationError::NonPositiveValue { field: Field::CrashCost, value: -5.0 };
        assert!(err.to_string().contains("crash_cost"));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_duplicate_lists_keys() {
        let err = ValidationError::DuplicateField {
            field: Field::RunCutoff,
            keys: vec!["cutoff".into(), "run_cutoff".into()],
        };
        assert!(err.to_string().contains("cutoff, run_cutoff"));
        assert_eq!(err.kind(), ErrorKind::DuplicateField);
        assert_eq!(err.field(), Field::RunCutoff);
    }

    #[test]
    fn test_aggregate_lists_every_error() {
        let mut errors = ValidationErrors::default();
        errors.push(ValidationError::InvalidEnumValue {
            field: Field::Objective,
            value: "speed".into(),
        });
        errors.push(ValidationError::NonPositiveValue { field: Field::RunLimit, value: 0.0 });

        let msg = errors.to_string();
        assert!(msg.contains("2 validation error(s)"));
        assert!(msg.contains("speed"));
        assert!(msg.contains("run_limit"));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(Field::RunLimit, ErrorKind::NonPositiveValue));
        assert!(!errors.contains(Field::RunLimit, ErrorKind::Coercion));
        assert_eq!(errors.for_field(Field::Objective).count(), 1);
    }

    #[test]
    fn test_warning_display() {
        let msg = ScenarioWarning::UnboundedTermination.to_string();
        assert!(msg.contains("wallclock_limit"));
        assert!(msg.contains("run_limit"));

        let msg = ScenarioWarning::UnknownField { key: "lr".into() }.to_string();
        assert!(msg.contains("lr"));
    }
}
