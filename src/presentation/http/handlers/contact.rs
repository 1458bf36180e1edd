//! Contact Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::AddContactRequest;
use crate::application::dto::response::{ContactLineResponse, UserResponse};
use crate::application::services::{ContactService, ContactServiceImpl};
use crate::infrastructure::repositories::{SqliteContactRepository, SqliteUserRepository};
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};
use crate::startup::AppState;

fn contact_service(
    state: &AppState,
) -> ContactServiceImpl<SqliteContactRepository, SqliteUserRepository> {
    ContactServiceImpl::new(
        Arc::new(SqliteContactRepository::new(state.db.clone())),
        Arc::new(SqliteUserRepository::new(state.db.clone())),
    )
}

/// List the contacts of a user
pub async fn list_contacts(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    page: PageRequest,
) -> Result<Json<Page<UserResponse>>, AppError> {
    let contacts = contact_service(&state).list_contacts(user_id, page).await?;
    Ok(Json(contacts.map(UserResponse::from)))
}

/// Add a contact to the requester's own list
pub async fn add_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<AddContactRequest>,
) -> Result<(StatusCode, Json<ContactLineResponse>), AppError> {
    let line = contact_service(&state)
        .add_contact(auth.user_id, user_id, body.contact)
        .await?;

    Ok((StatusCode::CREATED, Json(line.into())))
}

/// Remove a contact from the requester's own list
pub async fn remove_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((user_id, contact_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    contact_service(&state)
        .remove_contact(auth.user_id, user_id, contact_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
