//! Domain error types

use thiserror::Error;

/// Input validation failures raised before any inference call is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{field}' is missing or empty")]
    MissingField { field: String },

    #[error("Invalid value '{value}' for '{field}' (expected one of: {expected})")]
    InvalidChoice {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Field '{field}' is not a number: '{value}'")]
    NotANumber { field: String, value: String },

    #[error("Prompt body cannot be empty")]
    EmptyBody,

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Invalid video reference: {0}")]
    InvalidVideoReference(String),
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    /// The offending field name, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::InvalidChoice { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotANumber { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = ValidationError::missing("subject");
        assert_eq!(
            error.to_string(),
            "Required field 'subject' is missing or empty"
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(ValidationError::missing("topics").field(), Some("topics"));
        assert_eq!(ValidationError::EmptyBody.field(), None);
        assert_eq!(
            ValidationError::OutOfRange {
                field: "hours".to_string(),
                value: 90,
                min: 1,
                max: 40,
            }
            .field(),
            Some("hours")
        );
    }
}
