//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally belong
//! to a single entity.
//!
//! ## Services
//!
//! - **SyntaxHighlighter**: renders snippet content into an HTML document

mod highlighting;

pub use highlighting::*;
