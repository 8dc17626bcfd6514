//! Length and numeric range rules.
//!
//! Length rules count characters of strings and items of arrays; numeric
//! rules read JSON numbers and numeric strings. Values of any other type
//! (and `null`) pass, leaving type checks to [`Number`](crate::Number) and
//! friends.

use fieldcheck_core::{Record, Rule};
use serde_json::Value;

use crate::params::as_number;

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl Rule for MinLength {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        length_of(value).is_none_or(|len| len >= self.0)
    }

    fn message(&self) -> String {
        format!("must be at least {} characters long", self.0)
    }

    fn name(&self) -> &str {
        "min_length"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxLength(pub usize);

impl Rule for MaxLength {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        length_of(value).is_none_or(|len| len <= self.0)
    }

    fn message(&self) -> String {
        format!("must be at most {} characters long", self.0)
    }

    fn name(&self) -> &str {
        "max_length"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Min(pub f64);

impl Rule for Min {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        as_number(value).is_none_or(|n| n >= self.0)
    }

    fn message(&self) -> String {
        format!("must be at least {}", self.0)
    }

    fn name(&self) -> &str {
        "min"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Max(pub f64);

impl Rule for Max {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        as_number(value).is_none_or(|n| n <= self.0)
    }

    fn message(&self) -> String {
        format!("must be at most {}", self.0)
    }

    fn name(&self) -> &str {
        "max"
    }
}

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy)]
pub struct Between {
    pub min: f64,
    pub max: f64,
}

impl Between {
    pub fn new(min: f64, max: f64) -> Result<Self, String> {
        if min > max {
            return Err(format!("min ({min}) must not exceed max ({max})"));
        }
        Ok(Self { min, max })
    }
}

impl Rule for Between {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        as_number(value).is_none_or(|n| (self.min..=self.max).contains(&n))
    }

    fn message(&self) -> String {
        format!("must be between {} and {}", self.min, self.max)
    }

    fn name(&self) -> &str {
        "between"
    }
}
