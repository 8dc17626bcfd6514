//! `fieldcheck-core` -- field-rule validation engine.
//!
//! Validates one flat record at a time against per-field rule chains. Rules
//! run in order and stop at the first failure; outcomes are collected in a
//! mergeable [`ValidationResult`]. Setup mistakes (unregistered fields,
//! unknown rule names) surface as [`ValidatorError`], never as failed
//! validation.

pub mod config;
pub mod error;
pub mod registry;
pub mod result;
pub mod rule;
pub mod validator;

pub use config::{FieldConfig, RuleConfig, RuleSetConfig};
pub use error::ValidatorError;
pub use registry::{RuleFactory, RuleRegistry};
pub use result::{ValidationReport, ValidationResult};
pub use rule::{MessageOverride, Record, Rule, SharedRule};
pub use validator::{FieldBuilder, UnknownFieldPolicy, Validator};
