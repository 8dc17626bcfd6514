//! Rule-name resolution.
//!
//! [`RuleRegistry`] is an explicit lookup table from a short rule name
//! (`"required"`, `"between"`) to a factory building the rule from its
//! parameters. The surrounding application populates it at startup; any
//! name left out of the table resolves to [`ValidatorError::InvalidRule`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidatorError;
use crate::rule::SharedRule;

/// Builds a rule from its parameters, or explains why the parameters are
/// unusable.
pub type RuleFactory = Arc<dyn Fn(&[Value]) -> Result<SharedRule, String> + Send + Sync>;

/// Name → factory table used by [`Validator`](crate::validator::Validator).
#[derive(Clone, Default)]
pub struct RuleRegistry {
    factories: BTreeMap<String, RuleFactory>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Result<SharedRule, String> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Construct the rule registered as `name` with `params`.
    pub fn create(&self, name: &str, params: &[Value]) -> Result<SharedRule, ValidatorError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ValidatorError::InvalidRule(name.to_string()))?;

        factory(params).map_err(|reason| ValidatorError::InvalidRuleParameters {
            rule: name.to_string(),
            reason,
        })
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
