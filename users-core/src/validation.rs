//! Field constraints for user input.
//!
//! Every field is checked independently so that a single response can report
//! all problems at once. Within one field only the first failing rule is
//! reported.

use serde::{Deserialize, Serialize};

/// Maximum length in bytes of `name` and `email`.
pub const MAX_FIELD_LEN: usize = 255;

/// Minimum accepted `age`.
pub const MIN_AGE: i32 = 18;

/// One rejected field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the offending field, e.g. `"email"`.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate the writable user fields, in the order name, email, age.
///
/// Blank means empty after trimming whitespace; the length limit applies to
/// the untrimmed value. There is no upper bound on `age`.
#[must_use]
pub fn validate_user_input(name: &str, email: &str, age: i32) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(err) = check_text("name", name) {
        errors.push(err);
    }
    if let Some(err) = check_text("email", email) {
        errors.push(err);
    }
    if age < MIN_AGE {
        errors.push(ValidationError::new("age", format!("age must be >= {MIN_AGE}")));
    }

    errors
}

fn check_text(field: &str, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::new(field, format!("{field} is required")))
    } else if value.len() > MAX_FIELD_LEN {
        Some(ValidationError::new(
            field,
            format!("{field} is too long (max {MAX_FIELD_LEN})"),
        ))
    } else {
        None
    }
}
