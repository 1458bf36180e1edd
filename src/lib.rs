//! # Snippet & Chat API
//!
//! A small REST backend offering:
//! - Code snippets rendered to standalone, syntax-highlighted HTML
//! - Per-user contacts lists
//! - Chats with members and messages
//! - Page-number pagination and optional `.json` format suffixes
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities, repository traits, highlighting contract
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: SQLite repositories and the syntect highlighter
//! - **Presentation Layer**: HTTP routes, extractors and middleware
//!
//! ## Module Structure
//!
//! ```text
//! snippet_chat_api/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database and highlighting implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, pagination, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Logging setup
pub mod telemetry;
