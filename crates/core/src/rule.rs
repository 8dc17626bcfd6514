//! The rule contract.
//!
//! Defines [`Rule`], the trait every validation rule implements, along with
//! the [`Record`] type rules are evaluated against and [`MessageOverride`],
//! a wrapper that swaps a rule's failure message.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A flat input record: field name to arbitrary JSON value.
pub type Record = serde_json::Map<String, Value>;

/// A rule shared between a validator's chains and the results it produces.
pub type SharedRule = Arc<dyn Rule>;

/// Trait implemented by all validation rules.
///
/// A rule is a predicate over one field's value plus a failure message. It
/// may read sibling fields through `record` (for confirmation-style rules)
/// but must not keep per-call state: the same instance is reused across
/// fields and runs.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Returns `true` when `value` satisfies the rule.
    fn validate(&self, value: &Value, field: &str, record: &Record) -> bool;

    /// Human-readable failure message.
    ///
    /// Only called after [`validate`](Rule::validate) returned `false`.
    fn message(&self) -> String;

    /// Identifier used in reports and logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Wraps a rule and replaces its failure message.
#[derive(Debug, Clone)]
pub struct MessageOverride {
    inner: SharedRule,
    message: String,
}

impl MessageOverride {
    pub fn new(inner: SharedRule, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// The wrapped rule.
    pub fn inner(&self) -> &SharedRule {
        &self.inner
    }
}

impl Rule for MessageOverride {
    fn validate(&self, value: &Value, field: &str, record: &Record) -> bool {
        self.inner.validate(value, field, record)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
