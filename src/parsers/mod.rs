//! Parsers for web markup.
//!
//! - `html` - rewriting of relative references in HTML attributes

pub mod html;

// Re-export commonly used items for convenience
pub use html::relative_to_absolute;
