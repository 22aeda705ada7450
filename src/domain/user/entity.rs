//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_profile, UserValidationError};

/// Store-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User attributes that can appear as a lookup key or a uniqueness conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    LoginName,
    EmailAddress,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::LoginName => "loginName",
            Self::EmailAddress => "emailAddress",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record
///
/// A user without an id has never been stored. Once stored, the id and
/// `created_at` never change; every revision produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    login_name: String,
    email_address: String,
    first_name: String,
    last_name: String,
}

impl User {
    /// Create an unsaved user after checking that every field is present
    pub fn new(
        login_name: impl Into<String>,
        email_address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let login_name = login_name.into();
        let email_address = email_address.into();
        let first_name = first_name.into();
        let last_name = last_name.into();

        validate_profile(&login_name, &email_address, &first_name, &last_name)?;

        Ok(Self {
            id: None,
            created_at: None,
            updated_at: None,
            login_name,
            email_address,
            first_name,
            last_name,
        })
    }

    // Getters

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn login_name(&self) -> &str {
        &self.login_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Re-run field validation, e.g. on a deserialized value
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_profile(
            &self.login_name,
            &self.email_address,
            &self.first_name,
            &self.last_name,
        )
    }

    // Derived values

    /// Copy of this user addressed at an existing record
    pub fn with_id(&self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    /// Copy of this user with id and timestamps cleared
    pub fn without_identity(self) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            ..self
        }
    }

    /// Stored form of a brand-new record
    pub fn persisted(self, id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            created_at: Some(now),
            updated_at: Some(now),
            ..self
        }
    }

    /// Replacement for `existing` carrying the profile fields of `candidate`
    ///
    /// Keeps the id and `created_at` of `existing`. The new `updated_at` never
    /// goes backwards, even if the clock does.
    pub fn revise(existing: &User, candidate: User, now: DateTime<Utc>) -> Self {
        let updated_at = match existing.updated_at {
            Some(previous) if previous > now => previous,
            _ => now,
        };

        Self {
            id: existing.id,
            created_at: existing.created_at.or(Some(now)),
            updated_at: Some(updated_at),
            login_name: candidate.login_name,
            email_address: candidate.email_address,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
        }
    }
}
