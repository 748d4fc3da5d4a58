//! Pure helper functions for manipulating URLs.
//!
//! - `url` - URL decomposition, reference resolution, and recomposition

pub mod url;

// Re-export commonly used items for convenience
pub use url::{
    combine, is_relative, normalize_path, parse_url_parts, unparse_url, UrlParts,
};
