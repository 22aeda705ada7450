//! Campus Users
//!
//! User-management core with:
//! - A concurrent in-memory user store with generated ids
//! - Uniqueness of login names and email addresses
//! - A user service applying create/update/filter policy on top of the store

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{DomainError, User, UserDataService, UserField, UserId};
pub use infrastructure::user::{InMemoryUserDataService, UserService};

use std::sync::Arc;

/// Build a user service over a fresh in-memory store
///
/// Each call yields an independent store; nothing is shared globally.
pub fn create_user_service(config: &AppConfig) -> UserService<InMemoryUserDataService> {
    let store = InMemoryUserDataService::with_capacity(config.store.initial_capacity);
    tracing::info!(
        initial_capacity = config.store.initial_capacity,
        "Created in-memory user store"
    );
    UserService::new(Arc::new(store))
}
