//! Format and membership rules.

use fieldcheck_core::{Record, Rule};
use regex::Regex;
use serde_json::Value;
use validator::ValidateEmail;

/// A syntactically valid email address.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Rule for Email {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.validate_email(),
            _ => false,
        }
    }

    fn message(&self) -> String {
        "must be a valid email address".to_string()
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// String values must match a regular expression. Non-string values pass.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }
}

impl Rule for Pattern {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        value.as_str().is_none_or(|s| self.0.is_match(s))
    }

    fn message(&self) -> String {
        format!("must match the pattern {}", self.0.as_str())
    }

    fn name(&self) -> &str {
        "regex"
    }
}

/// The value must equal one of a fixed set. `null` passes.
#[derive(Debug, Clone)]
pub struct OneOf(pub Vec<Value>);

impl Rule for OneOf {
    fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
        value.is_null() || self.0.contains(value)
    }

    fn message(&self) -> String {
        let allowed: Vec<String> = self
            .0
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        format!("must be one of: {}", allowed.join(", "))
    }

    fn name(&self) -> &str {
        "in"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(rule: &dyn Rule, value: Value) -> bool {
        rule.validate(&value, "test_field", &Record::new())
    }

    #[test]
    fn email_accepts_addresses() {
        assert!(check(&Email, json!("john@doe.example")));
        assert!(check(&Email, json!(null)));
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(!check(&Email, json!("john")));
        assert!(!check(&Email, json!("john@")));
        assert!(!check(&Email, json!(42)));
    }

    #[test]
    fn pattern_matches_strings() {
        let rule = Pattern::new("^[a-z]+$").unwrap();
        assert!(check(&rule, json!("hello")));
        assert!(!check(&rule, json!("Hello123")));
        assert!(check(&rule, json!(7)));
        assert_eq!(rule.message(), "must match the pattern ^[a-z]+$");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(Pattern::new("([a-z").is_err());
    }

    #[test]
    fn one_of_compares_values() {
        let rule = OneOf(vec![json!("a"), json!("b"), json!(3)]);
        assert!(check(&rule, json!("b")));
        assert!(check(&rule, json!(3)));
        assert!(!check(&rule, json!("d")));
        assert!(!check(&rule, json!("3")));
        assert_eq!(rule.message(), "must be one of: a, b, 3");
    }
}
