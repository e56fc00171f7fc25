//! JWT parsing and validation

mod jwt;

pub use jwt::{Claims, Principal, TokenValidator};
