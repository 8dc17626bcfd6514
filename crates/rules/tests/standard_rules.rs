//! Integration tests running the standard rule set through a validator.

use assert_matches::assert_matches;
use fieldcheck_core::{Record, RuleSetConfig, ValidationResult, Validator, ValidatorError};
use fieldcheck_rules::standard_registry;
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn signup_validator() -> Validator {
    let mut v = Validator::new(standard_registry());
    v.add_field("name")
        .rule("required", &[])
        .unwrap()
        .add_field("email")
        .rule("required", &[])
        .unwrap()
        .rule("email", &[])
        .unwrap()
        .add_field("age")
        .rule("number", &[])
        .unwrap();
    v
}

// ---------------------------------------------------------------------------
// Test: valid and invalid signup records
// ---------------------------------------------------------------------------

#[test]
fn valid_record_validates_every_field() {
    let v = signup_validator();
    let data = record(json!({"name": "John", "email": "john@doe.example", "age": 32}));

    let result = v.run(&data).unwrap();

    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert_eq!(result.validated(), ["name", "email", "age"].map(String::from));
}

#[test]
fn invalid_record_reports_first_failing_rule() {
    let v = signup_validator();
    let data = record(json!({"email": "john", "age": "x"}));

    let result = v.run(&data).unwrap();

    assert!(!result.is_valid());
    assert_eq!(result.error("email"), Some("must be a valid email address"));
    assert_eq!(result.error("age"), Some("must be a number"));
    assert_eq!(result.failed_rule("email").unwrap().name(), "email");
    assert!(result.validated().is_empty());
    assert!(result.error("name").is_none());
}

#[test]
fn empty_email_stops_at_required() {
    let v = signup_validator();
    let result = v.run(&record(json!({"email": ""}))).unwrap();
    assert_eq!(result.error("email"), Some("is required"));
    assert_eq!(result.failed_rule("email").unwrap().name(), "required");
}

#[test]
fn repeated_runs_give_identical_results() {
    let v = signup_validator();
    for data in [
        json!({"name": "John", "email": "john@doe.example", "age": 32}),
        json!({"email": "john", "age": "x"}),
    ] {
        let data = record(data);
        let first = v.run(&data).unwrap();
        let second = v.run(&data).unwrap();
        assert_eq!(first.is_valid(), second.is_valid());
        assert_eq!(first.errors(), second.errors());
        assert_eq!(first.validated(), second.validated());
    }
}

#[test]
fn strict_run_enforces_required_on_missing_fields() {
    let v = signup_validator();
    let result = v.run_strict(&record(json!({"age": 40}))).unwrap();

    assert!(!result.is_valid());
    assert_eq!(result.error("name"), Some("is required"));
    assert_eq!(result.error("email"), Some("is required"));
    assert!(result.is_validated("age"));
}

// ---------------------------------------------------------------------------
// Test: cross-field and parameterized rules
// ---------------------------------------------------------------------------

#[test]
fn password_confirmation() {
    let mut v = Validator::new(standard_registry());
    v.add_field("password")
        .rule("min_length", &[json!(8)])
        .unwrap()
        .add_field("password_confirm")
        .rule("same", &[json!("password")])
        .unwrap()
        .message("Passwords do not match");

    let ok = v
        .run(&record(json!({"password": "correct horse", "password_confirm": "correct horse"})))
        .unwrap();
    assert!(ok.is_valid());

    let bad = v
        .run(&record(json!({"password": "correct horse", "password_confirm": "battery"})))
        .unwrap();
    assert_eq!(bad.error("password_confirm"), Some("Passwords do not match"));
    assert_eq!(bad.failed_rule("password_confirm").unwrap().name(), "same");
}

#[test]
fn age_bounds() {
    let mut v = Validator::new(standard_registry());
    v.add_field("age")
        .rule("integer", &[])
        .unwrap()
        .rule("between", &[json!(18), json!(120)])
        .unwrap();

    assert!(v.run(&record(json!({"age": 18}))).unwrap().is_valid());

    let result = v.run(&record(json!({"age": 17}))).unwrap();
    assert_eq!(result.error("age"), Some("must be between 18 and 120"));
}

#[test]
fn bad_parameters_are_configuration_errors() {
    let v = Validator::new(standard_registry());

    assert_matches!(
        v.create_rule_instance("between", &[json!(1)]),
        Err(ValidatorError::InvalidRuleParameters { rule, .. }) if rule == "between"
    );
    assert_matches!(
        v.create_rule_instance("regex", &[json!("([a-z")]),
        Err(ValidatorError::InvalidRuleParameters { .. })
    );
    assert_matches!(
        v.create_rule_instance("required", &[json!(true)]),
        Err(ValidatorError::InvalidRuleParameters { .. })
    );
    assert_matches!(
        v.create_rule_instance("nonexistent", &[]),
        Err(ValidatorError::InvalidRule(name)) if name == "nonexistent"
    );
}

// ---------------------------------------------------------------------------
// Test: validators loaded from config
// ---------------------------------------------------------------------------

#[test]
fn config_loaded_validator_merges_with_nested_result() {
    let config: RuleSetConfig = serde_json::from_value(json!({
        "fields": [
            { "name": "status", "rules": [{ "rule": "in", "params": ["draft", "published"] }] },
            { "name": "slug", "rules": [
                { "rule": "required" },
                { "rule": "regex", "params": ["^[a-z0-9-]+$"], "message": "Slug must be lowercase" }
            ] }
        ]
    }))
    .unwrap();
    let v = Validator::from_config(&config, standard_registry()).unwrap();

    let mut combined = ValidationResult::new();
    let post = v
        .run(&record(json!({"status": "archived", "slug": "Hello World"})))
        .unwrap();
    combined.merge(&post, Some("post."));

    assert!(!combined.is_valid());
    assert_eq!(
        combined.error("post.status"),
        Some("must be one of: draft, published")
    );
    assert_eq!(combined.error("post.slug"), Some("Slug must be lowercase"));
}
