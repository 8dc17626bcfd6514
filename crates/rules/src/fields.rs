//! Cross-field rules.

use fieldcheck_core::{Record, Rule};
use serde_json::Value;

/// The value must equal another field of the same record, as in a
/// password confirmation. A missing sibling never matches; a `null` value
/// passes.
#[derive(Debug, Clone)]
pub struct Same {
    other: String,
}

impl Same {
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
        }
    }
}

impl Rule for Same {
    fn validate(&self, value: &Value, _field: &str, record: &Record) -> bool {
        value.is_null() || record.get(&self.other) == Some(value)
    }

    fn message(&self) -> String {
        format!("must match {}", self.other)
    }

    fn name(&self) -> &str {
        "same"
    }
}
