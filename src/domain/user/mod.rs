//! User domain
//!
//! This module provides the user entity, field validation, and the data
//! service port that storage backends implement.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserField, UserId};
pub use repository::UserDataService;
pub use validation::{validate_login_name, validate_profile, UserValidationError};

#[cfg(test)]
pub use repository::MockUserDataService;
