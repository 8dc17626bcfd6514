//! Parameter decoding shared by the rule factories.

use serde_json::Value;

/// Fail unless exactly `expected` parameters were given.
pub(crate) fn expect_count(params: &[Value], expected: usize) -> Result<(), String> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(format!(
            "expected {expected} parameter(s), got {}",
            params.len()
        ))
    }
}

pub(crate) fn number(params: &[Value], index: usize) -> Result<f64, String> {
    params
        .get(index)
        .and_then(as_number)
        .ok_or_else(|| format!("parameter {index} must be a number"))
}

pub(crate) fn length(params: &[Value], index: usize) -> Result<usize, String> {
    params
        .get(index)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| format!("parameter {index} must be a non-negative integer"))
}

pub(crate) fn string(params: &[Value], index: usize) -> Result<String, String> {
    params
        .get(index)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("parameter {index} must be a string"))
}

/// Numeric view of a value: JSON numbers and numeric strings.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
