//! User domain
//!
//! Domain types for user records plus the lookup capability trait that
//! any storage backend implements.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserStatus};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
