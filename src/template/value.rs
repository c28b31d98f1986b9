use serde_json::{Number, Value};

use crate::error::{ValueError, ValueKind};

#[must_use]
pub const fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::Text,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Renders text or a number for interpolation. Numbers use the shortest
/// decimal form without exponent, so `3.0` becomes `"3"`.
///
/// # Errors
///
/// Returns an error for booleans, null, arrays and objects.
pub fn to_text(value: &Value) -> Result<String, ValueError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(format_number(number)),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Err(ValueError::Unsupported {
                kind: value_kind(value),
            })
        }
    }
}

/// Reads an integer from a number (truncated toward zero) or numeric text.
///
/// # Errors
///
/// Returns an error for non-numeric text, out-of-range numbers and any
/// non-scalar value.
pub fn to_int(value: &Value) -> Result<i64, ValueError> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            match trimmed.parse::<i64>() {
                Ok(parsed) => Ok(parsed),
                Err(int_err) => trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(truncate)
                    .ok_or_else(|| ValueError::NotAnInteger {
                        value: text.clone(),
                        source: int_err,
                    }),
            }
        }
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(truncate))
            .ok_or_else(|| ValueError::OutOfRange {
                value: number.to_string(),
            }),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Err(ValueError::Unsupported {
                kind: value_kind(value),
            })
        }
    }
}

/// Reads a real number from a number or numeric text.
///
/// # Errors
///
/// Returns an error for non-numeric text and any non-scalar value.
pub fn to_float(value: &Value) -> Result<f64, ValueError> {
    match value {
        Value::String(text) => {
            text.trim()
                .parse::<f64>()
                .map_err(|err| ValueError::NotANumber {
                    value: text.clone(),
                    source: err,
                })
        }
        Value::Number(number) => number.as_f64().ok_or_else(|| ValueError::OutOfRange {
            value: number.to_string(),
        }),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Err(ValueError::Unsupported {
                kind: value_kind(value),
            })
        }
    }
}

fn format_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    number
        .as_f64()
        .map_or_else(|| number.to_string(), |float| float.to_string())
}

fn truncate(float: f64) -> Option<i64> {
    let truncated = float.trunc();
    let in_range = truncated.is_finite()
        && truncated >= i64::MIN as f64
        && truncated < i64::MAX as f64;
    in_range.then_some(truncated as i64)
}
