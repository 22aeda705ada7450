//! User validation utilities

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Login name cannot be empty")]
    EmptyLoginName,

    #[error("Email address cannot be empty")]
    EmptyEmailAddress,

    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Last name cannot be empty")]
    EmptyLastName,
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate a login name
///
/// Format rules (character classes, length caps) belong to the caller;
/// only presence is checked here.
pub fn validate_login_name(login_name: &str) -> Result<(), UserValidationError> {
    if login_name.is_empty() {
        return Err(UserValidationError::EmptyLoginName);
    }

    Ok(())
}

/// Validate the four profile fields of a user, in declaration order
pub fn validate_profile(
    login_name: &str,
    email_address: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(), UserValidationError> {
    validate_login_name(login_name)?;

    if email_address.is_empty() {
        return Err(UserValidationError::EmptyEmailAddress);
    }

    if first_name.is_empty() {
        return Err(UserValidationError::EmptyFirstName);
    }

    if last_name.is_empty() {
        return Err(UserValidationError::EmptyLastName);
    }

    Ok(())
}
