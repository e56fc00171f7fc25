//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{User, UserId, UserRepository, UserStatus};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Relies on unique constraints on the `email` and `username` columns for
/// at-most-one lookup semantics. Comparisons are the column collation's
/// exact match; no case folding happens on this side.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_by(
        &self,
        column: &'static str,
        query: &str,
        value: &str,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to get user by {}: {}", column, e))
            })?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, username, password_hash, status, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_by(
            "email",
            r#"
            SELECT id, email, username, password_hash, status, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
            email,
        )
        .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_by(
            "username",
            r#"
            SELECT id, email, username, password_hash, status, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
            username,
        )
        .await
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read user id: {}", e)))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| DomainError::storage(format!("Failed to read email: {}", e)))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| DomainError::storage(format!("Failed to read username: {}", e)))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| DomainError::storage(format!("Failed to read password hash: {}", e)))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| DomainError::storage(format!("Failed to read status: {}", e)))?;
    let created_at = row
        .try_get("created_at")
        .map_err(|e| DomainError::storage(format!("Failed to read created_at: {}", e)))?;
    let updated_at = row
        .try_get("updated_at")
        .map_err(|e| DomainError::storage(format!("Failed to read updated_at: {}", e)))?;

    Ok(User::from_storage(
        UserId::new(id),
        email,
        username,
        password_hash,
        str_to_status(&status)?,
        created_at,
        updated_at,
    ))
}

fn str_to_status(s: &str) -> Result<UserStatus, DomainError> {
    match s {
        "active" => Ok(UserStatus::Active),
        "suspended" => Ok(UserStatus::Suspended),
        other => Err(DomainError::storage(format!(
            "Unknown user status in storage: '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_to_status() {
        assert_eq!(str_to_status("active").unwrap(), UserStatus::Active);
        assert_eq!(str_to_status("suspended").unwrap(), UserStatus::Suspended);
        assert!(str_to_status("deleted").is_err());
    }
}
