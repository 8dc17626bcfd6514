//! Field registry and the validation run.
//!
//! A [`Validator`] maps field names to ordered rule chains and evaluates an
//! input [`Record`] against them. Rules are attached either directly with
//! [`Validator::add_rule`] or by name through the [`FieldBuilder`] returned
//! from [`Validator::add_field`], which resolves names via the validator's
//! [`RuleRegistry`].

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidatorError;
use crate::registry::RuleRegistry;
use crate::result::ValidationResult;
use crate::rule::{MessageOverride, Record, Rule, SharedRule};

/// What a run does with input fields that were never registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Fail the run with [`ValidatorError::InvalidField`].
    #[default]
    Reject,
    /// Skip the field; it is neither validated nor failed.
    Ignore,
}

/// Field → rule-chain registry and run orchestrator.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    fields: BTreeMap<String, Vec<SharedRule>>,
    registry: RuleRegistry,
    unknown_fields: UnknownFieldPolicy,
}

impl Validator {
    /// Create a validator resolving rule names through `registry`.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn unknown_field_policy(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Register `name` with an empty rule chain, resetting any existing chain.
    ///
    /// The returned builder attaches rules to `name`.
    pub fn add_field(&mut self, name: impl Into<String>) -> FieldBuilder<'_> {
        let field = name.into();
        self.fields.insert(field.clone(), Vec::new());
        FieldBuilder {
            validator: self,
            field,
        }
    }

    /// Append `rule` to `field`'s chain, registering the field if needed.
    pub fn add_rule(&mut self, field: impl Into<String>, rule: SharedRule) -> &mut Self {
        self.fields.entry(field.into()).or_default().push(rule);
        self
    }

    /// The rule chain registered for `field`.
    pub fn field_rules(&self, field: &str) -> Result<&[SharedRule], ValidatorError> {
        self.fields
            .get(field)
            .map(Vec::as_slice)
            .ok_or_else(|| ValidatorError::InvalidField(field.to_string()))
    }

    /// Every registered field with its rule chain.
    pub fn rules(&self) -> &BTreeMap<String, Vec<SharedRule>> {
        &self.fields
    }

    /// Build the rule registered as `name` with `params`.
    pub fn create_rule_instance(
        &self,
        name: &str,
        params: &[Value],
    ) -> Result<SharedRule, ValidatorError> {
        self.registry.create(name, params)
    }

    /// Validate `data` into a fresh result.
    pub fn run(&self, data: &Record) -> Result<ValidationResult, ValidatorError> {
        let mut result = ValidationResult::new();
        self.run_with(data, &mut result)?;
        Ok(result)
    }

    /// Validate `data` into an existing result.
    ///
    /// The result's validity flag is reset to `true` before evaluation;
    /// errors and validated fields already present are kept. Only fields
    /// present in `data` are evaluated, in `data`'s order.
    pub fn run_with(
        &self,
        data: &Record,
        result: &mut ValidationResult,
    ) -> Result<(), ValidatorError> {
        let chains = self.resolve_chains(data)?;

        result.set_valid(true);
        for (field, value, rules) in chains {
            evaluate_field(field, value, rules, data, result);
        }

        tracing::debug!(
            fields = data.len(),
            errors = result.errors().len(),
            valid = result.is_valid(),
            "Validation run complete",
        );
        Ok(())
    }

    /// Like [`run`](Self::run), but registered fields missing from `data`
    /// are also evaluated, against `null`.
    pub fn run_strict(&self, data: &Record) -> Result<ValidationResult, ValidatorError> {
        let mut result = self.run(data)?;

        let null = Value::Null;
        for (field, rules) in &self.fields {
            if !data.contains_key(field) {
                evaluate_field(field, &null, rules, data, &mut result);
            }
        }
        Ok(result)
    }

    /// Pair every input field with its chain before anything is evaluated, so
    /// an unknown field aborts the run without touching the result.
    fn resolve_chains<'a>(
        &'a self,
        data: &'a Record,
    ) -> Result<Vec<(&'a str, &'a Value, &'a [SharedRule])>, ValidatorError> {
        let mut chains = Vec::with_capacity(data.len());
        for (field, value) in data {
            match self.field_rules(field) {
                Ok(rules) => chains.push((field.as_str(), value, rules)),
                Err(_) if self.unknown_fields == UnknownFieldPolicy::Ignore => {
                    tracing::debug!(field = %field, "Ignoring unregistered field");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(chains)
    }
}

/// Evaluate one field's chain, stopping at the first failing rule.
fn evaluate_field(
    field: &str,
    value: &Value,
    rules: &[SharedRule],
    data: &Record,
    result: &mut ValidationResult,
) {
    match rules.iter().find(|rule| !rule.validate(value, field, data)) {
        Some(rule) => {
            tracing::debug!(field, rule = rule.name(), "Field failed validation");
            result.record_failure(field, rule);
            result.set_valid(false);
        }
        None => result.set_validated(field),
    }
}

/// Fluent rule attachment for one field.
///
/// Returned by [`Validator::add_field`]; every rule attached through the
/// builder goes to that field's chain.
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    validator: &'a mut Validator,
    field: String,
}

impl<'a> FieldBuilder<'a> {
    /// The field rules are being attached to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Resolve `name` through the registry and append the rule.
    pub fn rule(self, name: &str, params: &[Value]) -> Result<Self, ValidatorError> {
        let rule = self.validator.create_rule_instance(name, params)?;
        Ok(self.with_shared(rule))
    }

    /// Append an already-built rule.
    pub fn with(self, rule: impl Rule + 'static) -> Self {
        self.with_shared(Arc::new(rule))
    }

    pub fn with_shared(self, rule: SharedRule) -> Self {
        self.validator.add_rule(self.field.clone(), rule);
        self
    }

    /// Replace the failure message of the most recently attached rule.
    pub fn message(self, message: impl Into<String>) -> Self {
        let chain = self.validator.fields.entry(self.field.clone()).or_default();
        match chain.pop() {
            Some(last) => chain.push(Arc::new(MessageOverride::new(last, message))),
            None => tracing::warn!(field = %self.field, "No rule to attach message to"),
        }
        self
    }

    /// Start attaching rules to another field.
    pub fn add_field(self, name: impl Into<String>) -> FieldBuilder<'a> {
        let validator = self.validator;
        validator.add_field(name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
