//! Route Configuration
//!
//! Configures all HTTP routes for the API. Every route is registered in its
//! canonical trailing-slash form; [`normalize_path`] maps suffixed and
//! unslashed variants onto it before routing.

use axum::{
    extract::Request,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::Layer;

use super::handlers;
use crate::presentation::middleware::{authenticate, normalize_path};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(root_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(chat_routes())
        .merge(snippet_routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .with_state(state);

    let normalized = middleware::from_fn::<_, (Request,)>(normalize_path).layer(api);

    Router::new().fallback_service(normalized)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found.".into())
}

/// API root and health probes
fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::api_root))
        .route("/health/", get(handlers::health::health_check))
        .route("/health/live/", get(handlers::health::liveness))
        .route("/health/ready/", get(handlers::health::readiness))
}

/// Registration and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register/", post(handlers::auth::register))
        .route("/auth/login/", post(handlers::auth::login))
}

/// Users and their contacts lists
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(handlers::user::list_users))
        .route(
            "/users/{user_id}/",
            get(handlers::user::get_user).delete(handlers::user::delete_user),
        )
        .route(
            "/users/{user_id}/contacts/",
            get(handlers::contact::list_contacts).post(handlers::contact::add_contact),
        )
        .route(
            "/users/{user_id}/contacts/{contact_id}/",
            delete(handlers::contact::remove_contact),
        )
}

/// Chats, chat members and messages
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/chats/",
            get(handlers::chat::list_chats).post(handlers::chat::create_chat),
        )
        .route(
            "/chats/{chat_id}/",
            get(handlers::chat::get_chat)
                .put(handlers::chat::replace_chat)
                .patch(handlers::chat::update_chat)
                .delete(handlers::chat::delete_chat),
        )
        .route(
            "/chats/{chat_id}/users/",
            get(handlers::chat::list_members).post(handlers::chat::add_member),
        )
        .route(
            "/chats/{chat_id}/messages/",
            get(handlers::message::list_messages).post(handlers::message::send_message),
        )
}

/// Snippets and highlighting
fn snippet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/snippets/",
            get(handlers::snippet::list_snippets).post(handlers::snippet::create_snippet),
        )
        .route("/snippets/choices/", get(handlers::snippet::snippet_choices))
        .route(
            "/snippets/{snippet_id}/",
            get(handlers::snippet::get_snippet)
                .put(handlers::snippet::replace_snippet)
                .patch(handlers::snippet::update_snippet)
                .delete(handlers::snippet::delete_snippet),
        )
        .route(
            "/snippets/{snippet_id}/highlight/",
            get(handlers::snippet::highlight_snippet),
        )
}
