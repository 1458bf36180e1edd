//! REST API tests

mod auth_tests;
mod chat_tests;
mod contact_tests;
mod health_tests;
mod routing_tests;
mod snippet_tests;
mod user_tests;
