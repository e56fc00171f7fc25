//! Domain types and capability traits

pub mod error;
pub mod user;

pub use error::DomainError;
