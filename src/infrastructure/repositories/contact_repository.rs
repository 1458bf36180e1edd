//! Contact Repository Implementation
//!
//! SQLite implementation of the ContactRepository trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::user_repository::UserRow;
use crate::domain::{ContactLine, ContactRepository, ContactsList, User};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ContactsListRow {
    id: i64,
    owner_id: i64,
}

impl From<ContactsListRow> for ContactsList {
    fn from(row: ContactsListRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.owner_id,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ContactLineRow {
    id: i64,
    contacts_list_id: i64,
    contact_id: i64,
}

impl From<ContactLineRow> for ContactLine {
    fn from(row: ContactLineRow) -> Self {
        Self {
            id: row.id,
            contacts_list_id: row.contacts_list_id,
            contact_id: row.contact_id,
        }
    }
}

/// SQLite contact repository implementation.
#[derive(Clone)]
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn find_list(&self, owner_id: i64) -> Result<Option<ContactsList>, AppError> {
        let row = sqlx::query_as::<_, ContactsListRow>(
            "SELECT id, owner_id FROM contacts_lists WHERE owner_id = ?1",
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ContactsList::from))
    }

    async fn get_or_create_list(&self, owner_id: i64) -> Result<ContactsList, AppError> {
        sqlx::query(
            "INSERT INTO contacts_lists (owner_id) VALUES (?1) ON CONFLICT (owner_id) DO NOTHING",
        )
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, "Contacts list already exists"))?;

        self.find_list(owner_id).await?.ok_or_else(|| {
            AppError::Internal(format!("Contacts list of user {} vanished", owner_id))
        })
    }

    async fn add_contact(&self, list_id: i64, contact_id: i64) -> Result<ContactLine, AppError> {
        let row = sqlx::query_as::<_, ContactLineRow>(
            r#"
            INSERT INTO contact_lines (contacts_list_id, contact_id)
            VALUES (?1, ?2)
            RETURNING id, contacts_list_id, contact_id
            "#,
        )
        .bind(list_id)
        .bind(contact_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(
                e,
                "The fields contacts_list, contact must make a unique set.",
            )
        })?;

        Ok(row.into())
    }

    async fn remove_contact(&self, list_id: i64, contact_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "DELETE FROM contact_lines WHERE contacts_list_id = ?1 AND contact_id = ?2",
        )
        .bind(list_id)
        .bind(contact_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_contacts(
        &self,
        owner_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.date_joined
            FROM contact_lines cl
            JOIN contacts_lists l ON l.id = cl.contacts_list_id
            JOIN users u ON u.id = cl.contact_id
            WHERE l.owner_id = ?1
            ORDER BY u.id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn count_contacts(&self, owner_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM contact_lines cl
            JOIN contacts_lists l ON l.id = cl.contacts_list_id
            WHERE l.owner_id = ?1
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
