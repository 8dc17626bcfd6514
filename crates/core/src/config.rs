//! Declarative rule-set configuration.
//!
//! A [`RuleSetConfig`] lists fields and their ordered rules by name, so a
//! validator can be loaded from JSON instead of wired up in code:
//!
//! ```json
//! {
//!   "unknown_fields": "ignore",
//!   "fields": [
//!     { "name": "email", "rules": [{ "rule": "required" }, { "rule": "email" }] },
//!     { "name": "age", "rules": [{ "rule": "min", "params": [18], "message": "Age must be at least 18" }] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidatorError;
use crate::registry::RuleRegistry;
use crate::validator::{UnknownFieldPolicy, Validator};

/// A complete set of field declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSetConfig {
    #[serde(default)]
    pub unknown_fields: UnknownFieldPolicy,
    pub fields: Vec<FieldConfig>,
}

/// One field and its rule chain, in evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A rule referenced by registry name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub rule: String,
    #[serde(default)]
    pub params: Vec<Value>,
    /// Replaces the rule's own failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Validator {
    /// Build a validator from `config`, resolving rule names via `registry`.
    ///
    /// Fails on the first rule name the registry does not know or whose
    /// parameters its factory rejects.
    pub fn from_config(
        config: &RuleSetConfig,
        registry: RuleRegistry,
    ) -> Result<Self, ValidatorError> {
        let mut validator = Validator::new(registry).with_unknown_fields(config.unknown_fields);

        for field in &config.fields {
            let mut builder = validator.add_field(field.name.clone());
            for rule in &field.rules {
                builder = builder.rule(&rule.rule, &rule.params)?;
                if let Some(message) = &rule.message {
                    builder = builder.message(message.clone());
                }
            }
        }

        tracing::debug!(fields = config.fields.len(), "Validator built from config");
        Ok(validator)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::rule::{Record, Rule, SharedRule};

    #[derive(Debug)]
    struct Present;

    impl Rule for Present {
        fn validate(&self, value: &Value, _field: &str, _record: &Record) -> bool {
            !value.is_null()
        }

        fn message(&self) -> String {
            "is required".to_string()
        }
    }

    fn registry() -> RuleRegistry {
        let mut registry = RuleRegistry::new();
        registry.register("present", |params| {
            if params.is_empty() {
                Ok(Arc::new(Present) as SharedRule)
            } else {
                Err("takes no parameters".to_string())
            }
        });
        registry
    }

    fn config(value: Value) -> RuleSetConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn builds_chains_in_declared_order() {
        let cfg = config(json!({
            "fields": [
                { "name": "name", "rules": [{ "rule": "present" }] },
                { "name": "nickname" }
            ]
        }));

        let v = Validator::from_config(&cfg, registry()).unwrap();
        assert_eq!(v.unknown_field_policy(), UnknownFieldPolicy::Reject);
        assert_eq!(v.field_rules("name").unwrap().len(), 1);
        assert!(v.field_rules("nickname").unwrap().is_empty());
    }

    #[test]
    fn applies_message_and_policy() {
        let cfg = config(json!({
            "unknown_fields": "ignore",
            "fields": [
                { "name": "name", "rules": [{ "rule": "present", "message": "Name please" }] }
            ]
        }));

        let v = Validator::from_config(&cfg, registry()).unwrap();
        let data = json!({"name": null, "other": 1});
        let result = v.run(data.as_object().unwrap()).unwrap();

        assert_eq!(result.error("name"), Some("Name please"));
        assert!(!result.is_validated("other"));
    }

    #[test]
    fn unknown_rule_name_fails() {
        let cfg = config(json!({
            "fields": [{ "name": "name", "rules": [{ "rule": "nonexistent" }] }]
        }));
        let err = Validator::from_config(&cfg, registry()).unwrap_err();
        assert_matches!(err, ValidatorError::InvalidRule(name) if name == "nonexistent");
    }

    #[test]
    fn rejected_params_fail() {
        let cfg = config(json!({
            "fields": [{ "name": "name", "rules": [{ "rule": "present", "params": [1] }] }]
        }));
        let err = Validator::from_config(&cfg, registry()).unwrap_err();
        assert_matches!(err, ValidatorError::InvalidRuleParameters { .. });
    }
}
