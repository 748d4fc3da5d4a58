//! Rewriting of relative references embedded in HTML markup.

use regex::{Captures, Regex};

/// Rewrites relative `href` and `src` attribute values to absolute form by
/// inserting `root` (the part of the URL before the path, without a
/// trailing slash) right after the opening quote.
///
/// Attribute values that already carry a scheme-like `:` (absolute URLs,
/// `mailto:`, `javascript:`) are left untouched. The quoting style and any
/// space, `%20`, or `+` continuation inside the value are preserved.
pub fn relative_to_absolute(html: &str, root: &str) -> String {
    let attr_re =
        Regex::new(r#"(href|src)=(['"])([^:'"]*)(['"]|(?:(?:%20|\s|\+)[^'"]*))"#).unwrap();

    attr_re
        .replace_all(html, |caps: &Captures| {
            format!("{}={}{}{}{}", &caps[1], &caps[2], root, &caps[3], &caps[4])
        })
        .into_owned()
}
