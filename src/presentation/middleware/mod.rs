//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod format_suffix;
pub mod logging;

pub use auth::{authenticate, AuthUser};
pub use format_suffix::normalize_path;
