//! Infrastructure implementations of the domain capabilities

pub mod auth;
pub mod logging;
pub mod user;
