//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_email, validate_username, UserValidationError};

/// User identifier - numeric surrogate key assigned by storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// User is active and can log in
    #[default]
    Active,
    /// User is temporarily suspended
    Suspended,
}

impl UserStatus {
    /// Check if the user can log in
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// User record as stored by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Surrogate key
    id: UserId,
    /// Email address, unique, used for login lookup
    email: String,
    /// Username, unique, used for display lookup
    username: String,
    /// Password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Current status of the account
    status: UserStatus,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record, validating email and username shape
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into();
        let username = username.into();

        validate_email(&email)?;
        validate_username(&username)?;

        let now = Utc::now();

        Ok(Self {
            id,
            email,
            username,
            password_hash: password_hash.into(),
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a record read from storage; storage already enforced shape
    pub(crate) fn from_storage(
        id: UserId,
        email: String,
        username: String,
        password_hash: String,
        status: UserStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            username,
            password_hash,
            status,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(UserId::new(1), "alice@example.com", "alice", "hashed").unwrap();

        assert_eq!(user.id().as_i64(), 1);
        assert_eq!(user.email(), "alice@example.com");
        assert_eq!(user.username(), "alice");
        assert_eq!(user.status(), UserStatus::Active);
        assert!(user.status().can_login());
    }

    #[test]
    fn test_new_user_rejects_bad_email() {
        let result = User::new(UserId::new(1), "not-an-email", "alice", "hashed");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_user_rejects_bad_username() {
        let result = User::new(UserId::new(1), "alice@example.com", "a", "hashed");
        assert!(result.is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(UserId::new(1), "alice@example.com", "alice", "hashed").unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed"));
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(42).to_string(), "42");
    }
}
