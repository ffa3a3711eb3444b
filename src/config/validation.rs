//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect rules that can never match any request
//! - Catch a rules list that admits everything
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::{GateConfig, RuleConfig};

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No rules at all; the gate would admit every request.
    #[error("no rules configured")]
    EmptyRules,

    /// Verb rules only ever see runs of two or more uppercase ASCII
    /// letters, so anything else can never match.
    #[error("rule {index}: verb {value:?} is not two or more uppercase ASCII letters")]
    UnmatchableVerb { index: usize, value: String },

    /// Route tokens are single whitespace-free tokens starting with '/'.
    #[error("rule {index}: route {value:?} is not a whitespace-free token starting with '/'")]
    UnmatchableRoute { index: usize, value: String },

    /// Cookie keys with delimiter characters never line up with a
    /// well-formed `key=value;` pair.
    #[error("rule {index}: cookie key {value:?} is empty or contains a delimiter")]
    UnmatchableCookieKey { index: usize, value: String },

    /// Cookie values are non-empty and free of space, ';' and ','.
    #[error("rule {index}: cookie value {value:?} is empty or contains a delimiter")]
    UnmatchableCookieValue { index: usize, value: String },
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rules.is_empty() {
        errors.push(ValidationError::EmptyRules);
    }

    for (index, rule) in config.rules.iter().enumerate() {
        match rule {
            RuleConfig::Verb { expected } => {
                if expected.len() < 2 || !expected.chars().all(|c| c.is_ascii_uppercase()) {
                    errors.push(ValidationError::UnmatchableVerb {
                        index,
                        value: expected.clone(),
                    });
                }
            }
            RuleConfig::Route { expected } => {
                if !expected.starts_with('/') || expected.chars().any(char::is_whitespace) {
                    errors.push(ValidationError::UnmatchableRoute {
                        index,
                        value: expected.clone(),
                    });
                }
            }
            RuleConfig::Cookie { key, expected } => {
                if key.is_empty() || key.contains(['=', ' ', ';', ',']) {
                    errors.push(ValidationError::UnmatchableCookieKey {
                        index,
                        value: key.clone(),
                    });
                }
                if expected.is_empty() || expected.contains([' ', ';', ',']) {
                    errors.push(ValidationError::UnmatchableCookieValue {
                        index,
                        value: expected.clone(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
