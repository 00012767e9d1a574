//! Lenient conversion of raw values into their semantic types
//!
//! Each helper returns `None` when the value cannot be represented; the
//! validator turns that into a `Coercion` error naming the field.

use serde_json::Value;

/// Float from a number or a numeric string. Non-finite values are rejected.
pub(crate) fn to_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Signed integer from an integer, an integral float, or a numeric string
///
/// Wide enough for the full `u64` range as well as negative input, so that
/// negative limits reach the positivity check instead of failing coercion.
pub(crate) fn to_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(i128::from)
            .or_else(|| n.as_i64().map(i128::from))
            .or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i128>().ok().or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(x: f64) -> Option<i128> {
    // i128::MAX as f64 rounds up to 2^127, so the upper bound is exclusive
    let in_range = x >= i128::MIN as f64 && x < i128::MAX as f64;
    (x.is_finite() && x.fract() == 0.0 && in_range).then_some(x as i128)
}

/// Boolean from a bool, 0/1, or a truthy/falsy word
pub(crate) fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Text from any scalar
pub(crate) fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// List of strings from a sequence of scalars, or a single scalar
pub(crate) fn to_text_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items.iter().map(to_text).collect(),
        other => to_text(other).map(|s| vec![s]),
    }
}
