//! Delivery platform authentication support
//!
//! The pieces of the delivery-order backend that request handlers lean on:
//! - User lookup behind a repository trait (in-memory and PostgreSQL backends)
//! - JWT parsing and validation against a configured symmetric secret

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::DomainError;
pub use infrastructure::auth::TokenValidator;
