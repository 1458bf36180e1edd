//! Contact Service
//!
//! Manages a user's contacts list. Only the owner may change it; anyone may
//! read it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ContactLine, ContactRepository, User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Contact service trait
#[async_trait]
pub trait ContactService: Send + Sync {
    /// One page of the contacts of `owner_id`.
    async fn list_contacts(&self, owner_id: i64, page: PageRequest)
        -> Result<Page<User>, ContactError>;

    /// Add `contact_id` to the contacts of `owner_id`, acting as `actor_id`.
    async fn add_contact(
        &self,
        actor_id: i64,
        owner_id: i64,
        contact_id: i64,
    ) -> Result<ContactLine, ContactError>;

    /// Remove `contact_id` from the contacts of `owner_id`, acting as `actor_id`.
    async fn remove_contact(
        &self,
        actor_id: i64,
        owner_id: i64,
        contact_id: i64,
    ) -> Result<(), ContactError>;
}

/// Contact service errors
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("User not found")]
    UserNotFound,

    #[error("Contact not found")]
    ContactNotFound,

    #[error("Invalid pk \"{0}\" - object does not exist.")]
    UnknownContact(i64),

    #[error("A user cannot add themselves as a contact.")]
    SelfContact,

    #[error("You do not have permission to perform this action.")]
    Forbidden,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<ContactError> for AppError {
    fn from(e: ContactError) -> Self {
        match e {
            ContactError::UserNotFound | ContactError::ContactNotFound => {
                AppError::NotFound(e.to_string())
            }
            ContactError::UnknownContact(_) | ContactError::SelfContact => {
                AppError::invalid_field("contact", e.to_string())
            }
            ContactError::Forbidden => AppError::Forbidden(e.to_string()),
            ContactError::Repository(e) => e,
        }
    }
}

/// ContactService implementation
pub struct ContactServiceImpl<C, U>
where
    C: ContactRepository,
    U: UserRepository,
{
    contact_repo: Arc<C>,
    user_repo: Arc<U>,
}

impl<C, U> ContactServiceImpl<C, U>
where
    C: ContactRepository,
    U: UserRepository,
{
    pub fn new(contact_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            contact_repo,
            user_repo,
        }
    }

    async fn ensure_owner(&self, actor_id: i64, owner_id: i64) -> Result<(), ContactError> {
        if self.user_repo.find_by_id(owner_id).await?.is_none() {
            return Err(ContactError::UserNotFound);
        }
        if actor_id != owner_id {
            return Err(ContactError::Forbidden);
        }
        Ok(())
    }
}

#[async_trait]
impl<C, U> ContactService for ContactServiceImpl<C, U>
where
    C: ContactRepository + 'static,
    U: UserRepository + 'static,
{
    async fn list_contacts(
        &self,
        owner_id: i64,
        page: PageRequest,
    ) -> Result<Page<User>, ContactError> {
        if self.user_repo.find_by_id(owner_id).await?.is_none() {
            return Err(ContactError::UserNotFound);
        }

        let count = self.contact_repo.count_contacts(owner_id).await?;
        let contacts = self
            .contact_repo
            .list_contacts(owner_id, page.limit(), page.offset())
            .await?;

        Ok(page.into_page(count, contacts)?)
    }

    async fn add_contact(
        &self,
        actor_id: i64,
        owner_id: i64,
        contact_id: i64,
    ) -> Result<ContactLine, ContactError> {
        self.ensure_owner(actor_id, owner_id).await?;

        if contact_id == owner_id {
            return Err(ContactError::SelfContact);
        }
        if self.user_repo.find_by_id(contact_id).await?.is_none() {
            return Err(ContactError::UnknownContact(contact_id));
        }

        let list = self.contact_repo.get_or_create_list(owner_id).await?;
        let line = self.contact_repo.add_contact(list.id, contact_id).await?;

        tracing::debug!(owner_id, contact_id, "Contact added");
        Ok(line)
    }

    async fn remove_contact(
        &self,
        actor_id: i64,
        owner_id: i64,
        contact_id: i64,
    ) -> Result<(), ContactError> {
        self.ensure_owner(actor_id, owner_id).await?;

        let list = self
            .contact_repo
            .find_list(owner_id)
            .await?
            .ok_or(ContactError::ContactNotFound)?;

        if !self.contact_repo.remove_contact(list.id, contact_id).await? {
            return Err(ContactError::ContactNotFound);
        }
        Ok(())
    }
}
