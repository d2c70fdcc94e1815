//! Configuration validation rules.
//!
//! - The endpoint must be a non-empty http(s) URL
//! - `max_records` may be zero, which yields empty timelines
//! - The request timeout must be positive

use crate::config::schema::TimelineConfig;
use crate::error::{Result, TimelineError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Offending field.
    pub field: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &TimelineConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let endpoint = config.endpoint.trim();
    if endpoint.is_empty() {
        errors.push(ValidationError {
            field: "endpoint",
            message: "endpoint must not be empty".to_string(),
        });
    } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        errors.push(ValidationError {
            field: "endpoint",
            message: format!("endpoint '{}' must be an http or https URL", endpoint),
        });
    }

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "request_timeout_secs",
            message: "request_timeout_secs must be at least 1".to_string(),
        });
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &TimelineConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(TimelineError::ConfigValidationError { message })
}
