//! Presence and type rules.

use fieldcheck_core::{Record, Rule};
use serde_json::Value;

use crate::params::as_number;

/// Fails on `null`, blank strings, and empty arrays or objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }

    fn message(&self) -> String {
        "is required".to_string()
    }

    fn name(&self) -> &str {
        "required"
    }
}

/// A JSON number or a numeric string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl Rule for Number {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        value.is_null() || as_number(value).is_some()
    }

    fn message(&self) -> String {
        "must be a number".to_string()
    }

    fn name(&self) -> &str {
        "number"
    }
}

/// A whole number, as a JSON number or an integer string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Rule for Integer {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        match value {
            Value::Null => true,
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        }
    }

    fn message(&self) -> String {
        "must be an integer".to_string()
    }

    fn name(&self) -> &str {
        "integer"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl Rule for Boolean {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        value.is_null() || value.is_boolean()
    }

    fn message(&self) -> String {
        "must be true or false".to_string()
    }

    fn name(&self) -> &str {
        "boolean"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Rule for Text {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        value.is_null() || value.is_string()
    }

    fn message(&self) -> String {
        "must be a string".to_string()
    }

    fn name(&self) -> &str {
        "string"
    }
}
