//! Authentication Middleware
//!
//! Resolves bearer tokens into an [`AuthUser`] request extension. Requests
//! without an `Authorization` header pass through anonymously; a header that
//! is present but malformed, expired or issued for a deleted account is
//! rejected with 401.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::application::services::verify_access_token;
use crate::domain::UserRepository;
use crate::infrastructure::repositories::SqliteUserRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Attach the authenticated user, if any, to the request.
pub async fn authenticate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !request.headers().contains_key(AUTHORIZATION) {
        return Ok(next.run(request).await);
    }

    let (mut parts, body) = request.into_parts();

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::Unauthorized("Invalid authorization header format".into()))?;

    let user_id = verify_access_token(bearer.token(), &state.settings.jwt)?;

    let users = SqliteUserRepository::new(state.db.clone());
    if users.find_by_id(user_id).await?.is_none() {
        tracing::debug!(user_id, "Token issued for a deleted user");
        return Err(AppError::Unauthorized("User not found".into()));
    }

    parts.extensions.insert(AuthUser { user_id });

    Ok(next.run(Request::from_parts(parts, body)).await)
}
