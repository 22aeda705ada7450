//! In-memory user data service implementation

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::user::{validate_login_name, User, UserDataService, UserField, UserId};
use crate::domain::DomainError;

const FIRST_ID: u64 = 1;

/// Records plus the id sequence, guarded together so that the uniqueness
/// scan, id allocation and write form one critical section
#[derive(Debug)]
struct UserTable {
    users: HashMap<UserId, User>,
    next_id: u64,
}

impl UserTable {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            users: HashMap::with_capacity(capacity),
            next_id: FIRST_ID,
        }
    }

    fn allocate_id(&mut self) -> UserId {
        let id = UserId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// First uniqueness violation against any record other than `candidate`
    fn find_conflict(&self, candidate: &User) -> Option<DomainError> {
        self.users
            .values()
            .filter(|existing| candidate.id().is_none() || existing.id() != candidate.id())
            .find_map(|existing| {
                if existing.login_name() == candidate.login_name() {
                    Some(DomainError::duplicate(
                        UserField::LoginName,
                        candidate.login_name(),
                    ))
                } else if existing.email_address() == candidate.email_address() {
                    Some(DomainError::duplicate(
                        UserField::EmailAddress,
                        candidate.email_address(),
                    ))
                } else {
                    None
                }
            })
    }
}

/// In-memory implementation of UserDataService
///
/// Volatile: contents live only as long as the instance.
#[derive(Debug)]
pub struct InMemoryUserDataService {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserDataService {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new empty store with room for `capacity` users
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::with_capacity(capacity))),
        }
    }
}

impl Default for InMemoryUserDataService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDataService for InMemoryUserDataService {
    async fn clear(&self) {
        let mut table = self.table.write().await;
        table.users.clear();
        table.next_id = FIRST_ID;
        debug!("Cleared all users from in-memory store");
    }

    async fn get_all(&self) -> Vec<User> {
        let table = self.table.read().await;
        table.users.values().cloned().collect()
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let table = self.table.read().await;
        table
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(UserField::Id, id))
    }

    async fn find_by_login_name(&self, login_name: &str) -> Result<Option<User>, DomainError> {
        validate_login_name(login_name)?;

        let table = self.table.read().await;
        Ok(table
            .users
            .values()
            .find(|u| u.login_name() == login_name)
            .cloned())
    }

    async fn upsert(&self, user: User) -> Result<User, DomainError> {
        user.validate()?;

        let mut table = self.table.write().await;

        if let Some(conflict) = table.find_conflict(&user) {
            return Err(conflict);
        }

        let now = Utc::now();

        match user.id() {
            None => {
                let id = table.allocate_id();
                let created = user.persisted(id, now);
                table.users.insert(id, created.clone());
                debug!(id = %id, login_name = %created.login_name(), "Created new user");
                Ok(created)
            }
            Some(id) => {
                let existing = table
                    .users
                    .get(&id)
                    .ok_or_else(|| DomainError::not_found(UserField::Id, id))?;

                let updated = User::revise(existing, user, now);
                table.users.insert(id, updated.clone());
                debug!(id = %id, login_name = %updated.login_name(), "Updated user");
                Ok(updated)
            }
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut table = self.table.write().await;

        if table.users.remove(id).is_none() {
            return Err(DomainError::not_found(UserField::Id, id));
        }

        debug!(id = %id, "Deleted user");
        Ok(())
    }
}
