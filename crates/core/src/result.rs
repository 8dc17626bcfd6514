//! Validation outcome accumulator.
//!
//! A [`ValidationResult`] collects, for one run (or several merged runs), the
//! overall validity flag, one error message per failed field, the rule that
//! caused each failure, and the fields that passed every rule.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rule::SharedRule;

/// Mutable outcome of validating one or more records.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    valid: bool,
    errors: BTreeMap<String, String>,
    failed_rules: BTreeMap<String, SharedRule>,
    validated: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
            failed_rules: BTreeMap::new(),
            validated: Vec::new(),
        }
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Set the error message for `field`, replacing any previous message.
    pub fn set_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All field errors, keyed by field name.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn set_failed_rule(&mut self, field: impl Into<String>, rule: SharedRule) {
        self.failed_rules.insert(field.into(), rule);
    }

    pub fn failed_rule(&self, field: &str) -> Option<&SharedRule> {
        self.failed_rules.get(field)
    }

    pub fn failed_rules(&self) -> &BTreeMap<String, SharedRule> {
        &self.failed_rules
    }

    /// Mark `field` as having passed all of its rules. Already-validated
    /// fields are not duplicated.
    pub fn set_validated(&mut self, field: impl Into<String>) {
        let field = field.into();
        if !self.validated.contains(&field) {
            self.validated.push(field);
        }
    }

    /// Validated fields in the order they were first marked.
    pub fn validated(&self) -> &[String] {
        &self.validated
    }

    pub fn is_validated(&self, field: &str) -> bool {
        self.validated.iter().any(|f| f == field)
    }

    /// Record that `field` failed on `rule`: stores the rule's message and
    /// the rule itself.
    pub(crate) fn record_failure(&mut self, field: &str, rule: &SharedRule) {
        self.set_error(field, rule.message());
        self.set_failed_rule(field, rule.clone());
    }

    /// Absorb `other` into this result.
    ///
    /// Field names from `other` are prefixed with `prefix` when given
    /// (`"address."` turns `city` into `address.city`). Validity combines
    /// with logical AND. When both sides hold an error for the same field
    /// the existing message and rule are kept together (first write wins)
    /// and a warning is logged; otherwise the incoming message and rule are
    /// taken together.
    pub fn merge(&mut self, other: &ValidationResult, prefix: Option<&str>) {
        let key = |field: &str| match prefix {
            Some(prefix) => format!("{prefix}{field}"),
            None => field.to_string(),
        };

        self.valid = self.valid && other.valid;

        for (field, message) in &other.errors {
            let merged = key(field);
            if let Some(kept) = self.errors.get(&merged) {
                tracing::warn!(
                    field = %merged,
                    kept = %kept,
                    dropped = %message,
                    "Merge collision on field error, keeping existing entry",
                );
                continue;
            }
            match other.failed_rules.get(field) {
                Some(rule) => {
                    self.failed_rules.insert(merged.clone(), rule.clone());
                }
                None => {
                    self.failed_rules.remove(&merged);
                }
            }
            self.errors.insert(merged, message.clone());
        }

        // Failed rules recorded without a message follow the same policy.
        for (field, rule) in &other.failed_rules {
            let merged = key(field);
            if !other.errors.contains_key(field) && !self.errors.contains_key(&merged) {
                self.failed_rules.entry(merged).or_insert_with(|| rule.clone());
            }
        }

        for field in &other.validated {
            self.set_validated(key(field));
        }
    }

    /// Serializable snapshot of this result.
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            valid: self.valid,
            errors: self.errors.clone(),
            failed_rules: self
                .failed_rules
                .iter()
                .map(|(field, rule)| (field.clone(), rule.name().to_string()))
                .collect(),
            validated: self.validated.clone(),
        }
    }
}

/// Plain-data view of a [`ValidationResult`], with failed rules by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
    pub failed_rules: BTreeMap<String, String>,
    pub validated: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
