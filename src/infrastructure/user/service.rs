//! User service for user management

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{User, UserDataService, UserId};
use crate::domain::DomainError;

/// User service orchestrating the domain verbs on top of a data service
#[derive(Debug)]
pub struct UserService<S: UserDataService> {
    data_service: Arc<S>,
}

impl<S: UserDataService> UserService<S> {
    /// Create a new user service
    pub fn new(data_service: Arc<S>) -> Self {
        Self { data_service }
    }

    /// The underlying data service
    pub fn data_service(&self) -> &Arc<S> {
        &self.data_service
    }

    /// List all users
    pub async fn get_all_users(&self) -> Vec<User> {
        debug!("Fetching all users");
        self.data_service.get_all().await
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        debug!(id = %id, "Fetching user");
        self.data_service.get_by_id(id).await
    }

    /// Filter users by login name
    ///
    /// Login names are unique, so the result holds at most one user. No match
    /// is an empty result rather than an error.
    pub async fn find_users_by_login_name(
        &self,
        login_name: &str,
    ) -> Result<Vec<User>, DomainError> {
        debug!(login_name = %login_name, "Fetching users by login name");

        match self.data_service.find_by_login_name(login_name).await? {
            Some(user) => Ok(vec![user]),
            None => {
                debug!(login_name = %login_name, "No user found with login name");
                Ok(Vec::new())
            }
        }
    }

    /// Create a new user
    ///
    /// Any id or timestamps on the input are discarded; the data service
    /// assigns them.
    pub async fn create_user(&self, user: User) -> Result<User, DomainError> {
        debug!(login_name = %user.login_name(), "Creating user");
        self.data_service.upsert(user.without_identity()).await
    }

    /// Replace the profile fields of an existing user
    pub async fn update_user(&self, id: &UserId, user: User) -> Result<User, DomainError> {
        debug!(id = %id, "Updating user");

        let existing = self.data_service.get_by_id(id).await?;
        let candidate = User::revise(&existing, user, chrono::Utc::now());

        self.data_service.upsert(candidate).await
    }

    /// Delete a user
    pub async fn delete_user_by_id(&self, id: &UserId) -> Result<(), DomainError> {
        debug!(id = %id, "Deleting user");
        self.data_service.delete(id).await
    }
}
