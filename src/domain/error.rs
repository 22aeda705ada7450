use thiserror::Error;

use super::user::UserField;

/// Core domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("User with {field} '{value}' not found")]
    NotFound { field: UserField, value: String },

    #[error("User with {field} '{value}' already exists")]
    Duplicate { field: UserField, value: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn not_found(field: UserField, value: impl ToString) -> Self {
        Self::NotFound {
            field,
            value: value.to_string(),
        }
    }

    pub fn duplicate(field: UserField, value: impl ToString) -> Self {
        Self::Duplicate {
            field,
            value: value.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for a missing record, regardless of which key was used
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for a uniqueness violation on any field
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}
