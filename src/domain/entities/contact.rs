//! Contact list entities and repository trait.
//!
//! Each user owns at most one contacts list; a contact line links the list to
//! another user. `(contacts_list_id, contact_id)` is unique.

use async_trait::async_trait;
use serde::Serialize;

use super::User;
use crate::shared::error::AppError;

/// Maps to the `contacts_lists` table (one row per owner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactsList {
    pub id: i64,
    pub owner_id: i64,
}

/// Maps to the `contact_lines` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLine {
    pub id: i64,
    pub contacts_list_id: i64,
    pub contact_id: i64,
}

/// Repository trait for contact list data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find the contacts list of a user, if one was created.
    async fn find_list(&self, owner_id: i64) -> Result<Option<ContactsList>, AppError>;

    /// Return the contacts list of a user, creating it on first use.
    async fn get_or_create_list(&self, owner_id: i64) -> Result<ContactsList, AppError>;

    /// Add a contact line. Fails with `Conflict` if the pair already exists.
    async fn add_contact(&self, list_id: i64, contact_id: i64) -> Result<ContactLine, AppError>;

    /// Remove a contact line. Returns `false` if there was none.
    async fn remove_contact(&self, list_id: i64, contact_id: i64) -> Result<bool, AppError>;

    /// Contacts of a user, ordered by user ID.
    async fn list_contacts(&self, owner_id: i64, limit: i64, offset: i64)
        -> Result<Vec<User>, AppError>;

    async fn count_contacts(&self, owner_id: i64) -> Result<i64, AppError>;
}
