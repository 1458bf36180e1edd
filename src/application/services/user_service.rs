//! User Service
//!
//! User listing, lookup and account deletion.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{SnippetRepository, User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// One page of users. The requester, when known, is left out.
    async fn list_users(
        &self,
        requester: Option<i64>,
        page: PageRequest,
    ) -> Result<Page<User>, UserError>;

    /// A user together with the IDs of the snippets they own.
    async fn get_user(&self, user_id: i64) -> Result<UserDetails, UserError>;

    /// Delete an account. Users may only delete themselves.
    async fn delete_user(&self, actor_id: i64, user_id: i64) -> Result<(), UserError>;
}

/// User with owned snippet IDs
#[derive(Debug, Clone)]
pub struct UserDetails {
    pub user: User,
    pub snippets: Vec<i64>,
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("You do not have permission to perform this action.")]
    Forbidden,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound => AppError::NotFound("User not found".into()),
            UserError::Forbidden => {
                AppError::Forbidden("You do not have permission to perform this action.".into())
            }
            UserError::Repository(e) => e,
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U, S>
where
    U: UserRepository,
    S: SnippetRepository,
{
    user_repo: Arc<U>,
    snippet_repo: Arc<S>,
}

impl<U, S> UserServiceImpl<U, S>
where
    U: UserRepository,
    S: SnippetRepository,
{
    pub fn new(user_repo: Arc<U>, snippet_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            snippet_repo,
        }
    }
}

#[async_trait]
impl<U, S> UserService for UserServiceImpl<U, S>
where
    U: UserRepository + 'static,
    S: SnippetRepository + 'static,
{
    async fn list_users(
        &self,
        requester: Option<i64>,
        page: PageRequest,
    ) -> Result<Page<User>, UserError> {
        let count = self.user_repo.count(requester).await?;
        let users = self
            .user_repo
            .list(requester, page.limit(), page.offset())
            .await?;

        Ok(page.into_page(count, users)?)
    }

    async fn get_user(&self, user_id: i64) -> Result<UserDetails, UserError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)?;
        let snippets = self.snippet_repo.ids_by_owner(user_id).await?;

        Ok(UserDetails { user, snippets })
    }

    async fn delete_user(&self, actor_id: i64, user_id: i64) -> Result<(), UserError> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(UserError::NotFound);
        }
        if actor_id != user_id {
            return Err(UserError::Forbidden);
        }

        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id, "User deleted");
        Ok(())
    }
}
