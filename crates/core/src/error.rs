/// Configuration and usage errors raised by the validation engine.
///
/// These signal that validation was set up incorrectly. A record failing its
/// rules is never one of these; that outcome is reported through
/// [`ValidationResult`](crate::result::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("Invalid field: {0} has not been registered")]
    InvalidField(String),

    #[error("Invalid rule: {0} is not a known rule")]
    InvalidRule(String),

    #[error("Invalid parameters for rule {rule}: {reason}")]
    InvalidRuleParameters { rule: String, reason: String },
}
