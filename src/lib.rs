//! # Relink Library
//!
//! Library and CLI tool for resolving URI references against a base URL
//! and for rewriting relative links in HTML documents to absolute form.
//!
//! ## Module organization
//!
//! - `core` - document-level absolutization and shared options
//! - `parsers` - HTML attribute rewriting
//! - `utils` - URL parsing, normalization, and recomposition primitives

pub mod core;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::parsers::*;
pub use crate::utils::*;
