//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - username: TEXT NOT NULL UNIQUE
/// - email: TEXT NOT NULL DEFAULT ''
/// - password_hash: TEXT NOT NULL
/// - date_joined: TEXT NOT NULL (RFC 3339)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Username (1-150 characters, unique)
    pub username: String,

    /// Email address, empty when not given
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub date_joined: DateTime<Utc>,
}

/// Fields required to insert a user; the id and join date are assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Repository trait for User data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Insert a user. Fails with `Conflict` if the username is taken.
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;

    /// Delete a user by ID. Owned snippets, contact rows and chat memberships
    /// go with it; authored messages are kept with a null author.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// List users ordered by ID, optionally leaving one user out.
    async fn list(&self, exclude: Option<i64>, limit: i64, offset: i64)
        -> Result<Vec<User>, AppError>;

    /// Count users, optionally leaving one user out.
    async fn count(&self, exclude: Option<i64>) -> Result<i64, AppError>;
}
