//! User infrastructure module
//!
//! This module provides the in-memory user data service and the user service
//! that orchestrates create/read/update/delete/filter on top of it.

mod repository;
mod service;

pub use repository::InMemoryUserDataService;
pub use service::UserService;
