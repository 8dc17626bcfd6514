//! Environment-driven settings for the batch binary.
//!
//! | Variable                    | Required | Default        | Description                                  |
//! |-----------------------------|----------|----------------|----------------------------------------------|
//! | `FIELDCHECK_RULES`          | yes      | --             | Path to the rule-set JSON file               |
//! | `FIELDCHECK_INPUT`          | yes      | --             | Path to a JSON object or array of objects    |
//! | `FIELDCHECK_UNKNOWN_FIELDS` | no       | from rule set  | `reject` or `ignore`                         |
//! | `FIELDCHECK_STRICT`         | no       | `false`        | Also check registered fields missing from a record |

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use fieldcheck_core::UnknownFieldPolicy;

pub const RULES_VAR: &str = "FIELDCHECK_RULES";
pub const INPUT_VAR: &str = "FIELDCHECK_INPUT";
pub const UNKNOWN_FIELDS_VAR: &str = "FIELDCHECK_UNKNOWN_FIELDS";
pub const STRICT_VAR: &str = "FIELDCHECK_STRICT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rules_path: PathBuf,
    pub input_path: PathBuf,
    /// Overrides the policy declared in the rule-set file when set.
    pub unknown_fields: Option<UnknownFieldPolicy>,
    pub strict: bool,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow!("{key} environment variable is required"))
        };

        let rules_path = PathBuf::from(required(RULES_VAR)?);
        let input_path = PathBuf::from(required(INPUT_VAR)?);

        let unknown_fields = match lookup(UNKNOWN_FIELDS_VAR).as_deref().map(str::trim) {
            None | Some("") => None,
            Some("reject") => Some(UnknownFieldPolicy::Reject),
            Some("ignore") => Some(UnknownFieldPolicy::Ignore),
            Some(other) => bail!("{UNKNOWN_FIELDS_VAR} must be `reject` or `ignore`, got `{other}`"),
        };

        let strict = match lookup(STRICT_VAR) {
            Some(v) => parse_flag(&v).with_context(|| format!("{STRICT_VAR} is not a boolean"))?,
            None => false,
        };

        Ok(Self {
            rules_path,
            input_path,
            unknown_fields,
            strict,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value `{other}`"),
    }
}
