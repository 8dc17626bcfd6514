//! Batch validation of JSON records against a rule-set file.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use fieldcheck_core::{Record, RuleSetConfig, ValidationReport, Validator, ValidatorError};
use serde::Serialize;
use serde_json::Value;

use crate::settings::Settings;

/// Report for one input record, tagged with its position in the input.
#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    pub index: usize,
    #[serde(flatten)]
    pub report: ValidationReport,
}

/// Outcome of a whole batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub reports: Vec<RecordReport>,
}

impl BatchOutcome {
    pub fn all_valid(&self) -> bool {
        self.reports.iter().all(|r| r.report.valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.report.valid).count()
    }
}

pub fn load_rule_set(path: &Path) -> anyhow::Result<RuleSetConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule set {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse rule set {}", path.display()))
}

pub fn load_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse input {}", path.display()))?;
    parse_records(value)
}

/// Accept either a single object or an array of objects.
pub fn parse_records(value: Value) -> anyhow::Result<Vec<Record>> {
    match value {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => Ok(record),
                other => bail!("Input item {i} is not an object: {other}"),
            })
            .collect(),
        other => bail!("Input must be an object or an array of objects, got {other}"),
    }
}

/// Validate every record, stopping at the first configuration error.
pub fn validate_all(
    validator: &Validator,
    records: &[Record],
    strict: bool,
) -> Result<Vec<RecordReport>, ValidatorError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let result = if strict {
                validator.run_strict(record)?
            } else {
                validator.run(record)?
            };
            Ok(RecordReport {
                index,
                report: result.report(),
            })
        })
        .collect()
}

/// Load the rule set and input named in `settings` and validate the input.
pub fn run(settings: &Settings) -> anyhow::Result<BatchOutcome> {
    let mut config = load_rule_set(&settings.rules_path)?;
    if let Some(policy) = settings.unknown_fields {
        config.unknown_fields = policy;
    }

    let validator = Validator::from_config(&config, fieldcheck_rules::standard_registry())
        .context("Invalid rule set")?;
    let records = load_records(&settings.input_path)?;

    tracing::info!(
        fields = config.fields.len(),
        records = records.len(),
        strict = settings.strict,
        "Validating records",
    );

    let reports = validate_all(&validator, &records, settings.strict)?;
    Ok(BatchOutcome { reports })
}
