pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{User, UserDataService, UserField, UserId, UserValidationError};
