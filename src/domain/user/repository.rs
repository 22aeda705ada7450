//! User data service trait

use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserField, UserId};
use crate::domain::DomainError;

/// Port for user record storage
///
/// Implementations own id generation and enforce that login names and email
/// addresses are unique across all stored users.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDataService: Send + Sync + Debug {
    /// Remove every user and restart id numbering at 1
    async fn clear(&self);

    /// Snapshot of all stored users, in no particular order
    async fn get_all(&self) -> Vec<User>;

    /// Get a user by id, failing with `NotFound` if absent
    async fn get_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Look up a user by exact login name
    async fn find_by_login_name(&self, login_name: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by login name, failing with `NotFound` if absent
    async fn get_by_login_name(&self, login_name: &str) -> Result<User, DomainError> {
        self.find_by_login_name(login_name)
            .await?
            .ok_or_else(|| DomainError::not_found(UserField::LoginName, login_name))
    }

    /// Insert a user without id, or replace the stored user with the same id
    async fn upsert(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user by id, failing with `NotFound` if absent
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
