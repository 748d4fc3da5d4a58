use std::error::Error;
use std::fmt;

use log::debug;

use crate::parsers::html::relative_to_absolute;
use crate::utils::url::{parse_url_parts, unparse_url};

/// Represents errors that can occur during relink processing
///
/// This error type encapsulates all possible errors that can occur
/// when absolutizing a document with the relink library.
#[derive(Debug)]
pub struct RelinkError {
    details: String,
}

impl RelinkError {
    /// Creates a new RelinkError with the given message
    ///
    /// # Arguments
    ///
    /// * `msg` - The error message describing what went wrong
    ///
    /// # Returns
    ///
    /// A new RelinkError instance
    pub fn new(msg: &str) -> RelinkError {
        RelinkError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for RelinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for RelinkError {}

/// Configuration options for relink processing
///
/// This struct contains the options that control how a document's base URL
/// is interpreted while rewriting its links.
#[derive(Default, Clone)]
pub struct RelinkOptions {
    /// Scheme assumed when the base URL carries none (`"http"` when unset)
    pub default_scheme: Option<String>,
}

/// Rewrites every relative `href`/`src` reference in an HTML document to
/// absolute form, using the document's base URL to derive the site root.
///
/// The base URL may be anything [`parse_url_parts`] can extract a host
/// from, including bare `host/path` strings; the scheme falls back to
/// `options.default_scheme`. This is the only fallible operation in the
/// crate: it errors when no host can be derived from the base URL.
///
/// # Arguments
///
/// * `html` - The HTML code
/// * `base_url` - The URL the document was retrieved from
/// * `options` - Processing options
///
/// # Returns
///
/// The rewritten HTML, or a RelinkError when the base URL has no host
pub fn absolutize_document(
    html: &str,
    base_url: &str,
    options: &RelinkOptions,
) -> Result<String, RelinkError> {
    let default_scheme = options.default_scheme.as_deref().unwrap_or("http");

    // Round-trip the base URL through unparse so that bare "host/path"
    // strings gain their host and scheme before the root is carved out.
    let resolved = unparse_url(&parse_url_parts(base_url), Some(default_scheme));
    let mut root_parts = parse_url_parts(&resolved);
    if root_parts.host.is_none() {
        return Err(RelinkError::new(&format!(
            "no host could be derived from base URL \"{}\"",
            base_url
        )));
    }

    // Keep scheme and authority only; the empty path suppresses the
    // default "/" so the root carries no trailing slash.
    root_parts.path = Some(String::new());
    root_parts.query = None;
    root_parts.fragment = None;
    let root = unparse_url(&root_parts, None);

    debug!("absolutizing document against root {}", root);

    Ok(relative_to_absolute(html, &root))
}
