//! Format Suffix Normalization
//!
//! Every route may be addressed with a format suffix (`/users.json`,
//! `/users/3.json`, `/chats/1/.json`) or a `?format=` query parameter, and
//! with or without a trailing slash. This middleware rewrites the request
//! path to the canonical slashed form before it reaches the router.
//!
//! Must wrap the router from the outside: a `Router::layer` runs after route
//! matching and could not influence it.

use axum::{
    extract::Request,
    http::{uri::PathAndQuery, Uri},
    middleware::Next,
    response::Response,
};

use crate::shared::error::AppError;

/// The only representation the API serves.
pub const SUPPORTED_FORMAT: &str = "json";

const FORMAT_PARAM: &str = "format";

/// Rewrite the request URI to its canonical form, rejecting unknown formats.
pub async fn normalize_path(mut request: Request, next: Next) -> Result<Response, AppError> {
    let canonical = canonical_path(request.uri().path(), request.uri().query())?;

    if request.uri().path() != canonical {
        let path_and_query = match request.uri().query() {
            Some(query) => format!("{}?{}", canonical, query),
            None => canonical,
        };
        let mut parts = request.uri().clone().into_parts();
        parts.path_and_query = Some(
            PathAndQuery::try_from(path_and_query)
                .map_err(|e| AppError::BadRequest(format!("Invalid request path: {}", e)))?,
        );
        *request.uri_mut() = Uri::from_parts(parts)
            .map_err(|e| AppError::BadRequest(format!("Invalid request path: {}", e)))?;
    }

    Ok(next.run(request).await)
}

/// Canonical slashed path for `path`, or 404 when a format other than JSON
/// is requested.
pub fn canonical_path(path: &str, query: Option<&str>) -> Result<String, AppError> {
    let (stem, suffix) = split_suffix(path);

    let params: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or_default())
        .map_err(|e| AppError::BadRequest(format!("Invalid query string: {}", e)))?;
    let query_format = params
        .iter()
        .find(|(key, _)| key == FORMAT_PARAM)
        .map(|(_, value)| value.as_str());

    for format in suffix.into_iter().chain(query_format) {
        if format != SUPPORTED_FORMAT {
            return Err(AppError::NotFound(format!("Unsupported format \"{}\"", format)));
        }
    }

    let mut canonical = stem.to_string();
    if !canonical.ends_with('/') {
        canonical.push('/');
    }
    Ok(canonical)
}

/// Split `.ext` off the last path segment.
fn split_suffix(path: &str) -> (&str, Option<&str>) {
    let last_segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[last_segment_start..].rfind('.') {
        Some(dot) => {
            let dot = last_segment_start + dot;
            (&path[..dot], Some(&path[dot + 1..]))
        }
        None => (path, None),
    }
}
