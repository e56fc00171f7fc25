//! User lookup capability trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user lookup
///
/// Lookups are exact-match and case-sensitive. Absence is `Ok(None)`;
/// only storage-level failures produce an error.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their surrogate key
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get the unique user with this email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Get the unique user with this username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<i64, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a user record
        pub async fn insert(&self, user: User) {
            let mut users = self.users.write().await;
            users.insert(user.id().as_i64(), user);
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(&id.as_i64()).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.email() == email).cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.username() == username).cloned())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_user(id: i64, email: &str, username: &str) -> User {
            User::new(UserId::new(id), email, username, "hashed_password").unwrap()
        }

        #[tokio::test]
        async fn test_find_by_email() {
            let repo = MockUserRepository::new();
            repo.insert(create_test_user(1, "alice@example.com", "alice"))
                .await;

            let found = repo.find_by_email("alice@example.com").await.unwrap();
            assert!(found.is_some());
            assert_eq!(found.unwrap().username(), "alice");

            let missing = repo.find_by_email("bob@example.com").await.unwrap();
            assert!(missing.is_none());
        }

        #[tokio::test]
        async fn test_find_by_username() {
            let repo = MockUserRepository::new();
            repo.insert(create_test_user(1, "alice@example.com", "alice"))
                .await;

            let found = repo.find_by_username("alice").await.unwrap();
            assert!(found.is_some());
            assert_eq!(found.unwrap().id().as_i64(), 1);
        }

        #[tokio::test]
        async fn test_exists_helpers() {
            let repo = MockUserRepository::new();
            repo.insert(create_test_user(1, "alice@example.com", "alice"))
                .await;

            assert!(repo.email_exists("alice@example.com").await.unwrap());
            assert!(!repo.email_exists("bob@example.com").await.unwrap());
            assert!(repo.username_exists("alice").await.unwrap());
            assert!(!repo.username_exists("bob").await.unwrap());
        }

        #[tokio::test]
        async fn test_storage_failure_propagates() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.find_by_email("alice@example.com").await;
            assert!(matches!(result, Err(DomainError::Storage { .. })));
        }
    }
}
