//! URL decomposition, reference resolution, and recomposition.
//!
//! Everything in this module is a pure function over strings: decomposition
//! is permissive and never fails, resolution degrades gracefully on
//! malformed input, and no state is held across calls.

use regex::Regex;

/// Scheme assumed for absolute references that carry an authority but no
/// scheme of their own (`//host/path`).
const DEFAULT_SCHEME: &str = "http";

/// The components of a URL as produced by [`parse_url_parts`].
///
/// Every field is independently optional; an absent field is distinct from
/// an empty one ("no query" vs "query is the empty string").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Splits a URL into its components.
///
/// Decomposition is lenient: malformed input yields a value with fewer
/// fields populated instead of an error, and the empty string yields a
/// value with every field absent. The query and fragment are considered
/// present (possibly empty) as soon as their `?`/`#` delimiter occurs; the
/// path is present only when non-empty.
pub fn parse_url_parts(url: &str) -> UrlParts {
    let mut parts = UrlParts::default();
    if url.is_empty() {
        return parts;
    }

    let (rest, fragment) = match url.find('#') {
        Some(i) => (&url[..i], Some(url[i + 1..].to_string())),
        None => (url, None),
    };
    parts.fragment = fragment;

    let (rest, query) = match rest.find('?') {
        Some(i) => (&rest[..i], Some(rest[i + 1..].to_string())),
        None => (rest, None),
    };
    parts.query = query;

    let mut rest = rest;
    if let Some(i) = rest.find(':') {
        let candidate = &rest[..i];
        let after = &rest[i + 1..];
        if is_scheme_name(candidate) {
            if after.starts_with("//") {
                parts.scheme = Some(candidate.to_string());
                rest = after;
            } else if candidate.len() == 1 && (after.starts_with('/') || after.starts_with('\\')) {
                // A Windows drive letter, not a scheme; the whole input
                // stays in the path.
            } else if leads_with_port(after) {
                // A bare host:port pair, not a scheme.
                let end = after.find('/').unwrap_or(after.len());
                match after[..end].parse() {
                    Ok(port) => {
                        parts.host = Some(candidate.to_string());
                        parts.port = Some(port);
                    }
                    // Out of range for a port; keep the digits in the host.
                    Err(_) => parts.host = Some(format!("{}:{}", candidate, &after[..end])),
                }
                rest = &after[end..];
            } else {
                parts.scheme = Some(candidate.to_string());
                rest = after;
            }
        }
    }

    if parts.host.is_none() && rest.starts_with("//") {
        let after = &rest[2..];
        let end = after.find('/').unwrap_or(after.len());
        parse_authority(&after[..end], &mut parts);
        rest = &after[end..];
    }

    if !rest.is_empty() {
        parts.path = Some(rest.to_string());
    }

    parts
}

/// Returns true when `name` is syntactically a scheme name: an ASCII
/// letter followed by letters, digits, `+`, `-`, or `.`.
fn is_scheme_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}

/// Returns true when `text` opens with a digit run (up to `/` or the end),
/// the shape a port number takes after a `:`.
fn leads_with_port(text: &str) -> bool {
    let digits = &text[..text.find('/').unwrap_or(text.len())];
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Decomposes the authority section (`user:password@host:port`) into
/// `parts`. Text after the last `:` that is not a valid port, whether
/// non-numeric or out of range, stays part of the host.
fn parse_authority(authority: &str, parts: &mut UrlParts) {
    let hostport = match authority.rfind('@') {
        Some(i) => {
            let userinfo = &authority[..i];
            if !userinfo.is_empty() {
                match userinfo.find(':') {
                    Some(j) => {
                        parts.user = Some(userinfo[..j].to_string());
                        parts.password = Some(userinfo[j + 1..].to_string());
                    }
                    None => parts.user = Some(userinfo.to_string()),
                }
            }
            &authority[i + 1..]
        }
        None => authority,
    };

    let host = match hostport.rfind(':') {
        Some(i) if leads_with_port(&hostport[i + 1..]) => match hostport[i + 1..].parse() {
            Ok(port) => {
                parts.port = Some(port);
                &hostport[..i]
            }
            // Out of range for a port; keep the digits in the host.
            Err(_) => hostport,
        },
        _ => hostport,
    };
    if !host.is_empty() {
        parts.host = Some(host.to_string());
    }
}

/// Removes dot-segments and duplicate slashes from a path.
///
/// Implements the dot-segment removal of RFC 3986 section 5.2.4 as a
/// fixed-point iteration over four substitution rules. Only the first
/// `segment/..` pair is collapsed per pass, after which the whole rule
/// chain restarts; the loop ends when a full pass changes nothing.
pub fn normalize_path(path: Option<&str>) -> String {
    let path = match path {
        Some(p) if !p.is_empty() => p,
        _ => return String::new(),
    };

    let re_slashes = Regex::new(r"//+").unwrap();
    let re_leading = Regex::new(r"^/\.\.?/").unwrap();
    let re_current = Regex::new(r"/\.(/|$)").unwrap();
    let re_parent = Regex::new(r"/[^/]*?/\.\.(/|$)").unwrap();

    let mut normalized = path.to_string();
    loop {
        let pass = re_slashes.replace_all(&normalized, "/").into_owned();
        let pass = re_leading.replace(&pass, "/").into_owned();
        let pass = re_current.replace_all(&pass, "/").into_owned();
        let pass = re_parent.replace(&pass, "/").into_owned();
        if pass == normalized {
            break;
        }
        normalized = pass;
    }

    normalized
}

/// Combines two URIs into a single URL.
///
/// In most cases `base` will be an absolute URL and `reference` a path and
/// optionally a query. Follows the reference resolution behavior of
/// RFC 3986 section 5: an absolute reference wins outright; otherwise the
/// reference is resolved against the base component by component. Never
/// fails; malformed input degrades to a best-effort result.
pub fn combine(base: &str, reference: &str) -> String {
    let reference_parts = parse_url_parts(reference);

    let mut combined = if reference_parts.scheme.is_some() || reference_parts.host.is_some() {
        // The reference is an absolute URI; the base plays no role.
        let mut parts = reference_parts;
        if parts.scheme.is_none() {
            parts.scheme = Some(DEFAULT_SCHEME.to_string());
        }
        parts
    } else {
        let base_parts = parse_url_parts(base);
        let mut parts = overlay(&base_parts, &reference_parts);

        match reference_parts.path.as_deref() {
            None => {
                // No path override: keep the base path, normalized. The
                // base query and fragment survive unless the reference
                // supplies its own.
                parts.path = Some(normalize_path(base_parts.path.as_deref()));
            }
            Some(path) if path.starts_with('/') => {
                // Absolute-path reference: no merge, and the base query
                // and fragment do not carry over.
                parts.path = Some(normalize_path(Some(path)));
                parts.query = reference_parts.query.clone();
                parts.fragment = reference_parts.fragment.clone();
            }
            Some(path) => {
                // Relative-path reference: merge with the base path minus
                // its final segment.
                let merged = format!("{}{}", merge_base(&base_parts), path);
                parts.path = Some(normalize_path(Some(&merged)));
                parts.query = reference_parts.query.clone();
                parts.fragment = reference_parts.fragment.clone();
            }
        }
        parts
    };

    // An explicit empty fragment collapses to no fragment at all.
    if combined.fragment.as_deref() == Some("") {
        combined.fragment = None;
    }

    unparse_url(&combined, None)
}

/// Field-wise merge: each component comes from the reference when it
/// supplied one, otherwise from the base.
fn overlay(base: &UrlParts, reference: &UrlParts) -> UrlParts {
    UrlParts {
        scheme: reference.scheme.clone().or_else(|| base.scheme.clone()),
        user: reference.user.clone().or_else(|| base.user.clone()),
        password: reference.password.clone().or_else(|| base.password.clone()),
        host: reference.host.clone().or_else(|| base.host.clone()),
        port: reference.port.or(base.port),
        path: reference.path.clone().or_else(|| base.path.clone()),
        query: reference.query.clone().or_else(|| base.query.clone()),
        fragment: reference.fragment.clone().or_else(|| base.fragment.clone()),
    }
}

/// The portion of the base path kept when merging with a relative-path
/// reference: everything up to and including the last `/`, or the empty
/// string when the base path has no `/` (forced to `/` when the base has
/// no host either).
fn merge_base(base: &UrlParts) -> String {
    let merged = match base.path.as_deref() {
        Some(path) => match path.rfind('/') {
            Some(i) => path[..=i].to_string(),
            None => String::new(),
        },
        None => String::new(),
    };

    if merged.is_empty() && base.host.is_none() {
        "/".to_string()
    } else {
        merged
    }
}

/// Assembles URL components back into a URL string.
///
/// A parts value with neither scheme nor host but a path is reinterpreted:
/// the text before the first `/` becomes the host and the remainder stays
/// the path. The scheme is lower-cased, with `default_scheme` filling in
/// when absent, and every URL is assumed to have a path except mailto
/// URLs. Absent components contribute no separators.
pub fn unparse_url(parts: &UrlParts, default_scheme: Option<&str>) -> String {
    let mut parts = parts.clone();

    if parts.scheme.is_none() && parts.host.is_none() {
        if let Some(path) = parts.path.take() {
            match path.find('/') {
                Some(i) => {
                    parts.host = Some(path[..i].to_string());
                    parts.path = Some(path[i..].to_string());
                }
                None => parts.host = Some(path),
            }
        }
    }

    parts.scheme = match parts.scheme.take() {
        Some(scheme) => Some(scheme.to_lowercase()),
        None => default_scheme.map(|scheme| scheme.to_lowercase()),
    };

    if parts.path.is_none()
        && parts.scheme.is_some()
        && parts.scheme.as_deref() != Some("mailto")
    {
        parts.path = Some("/".to_string());
    }

    let mut url = String::new();
    if let Some(scheme) = &parts.scheme {
        if scheme == "mailto" {
            url.push_str("mailto:");
        } else {
            url.push_str(scheme);
            url.push_str("://");
        }
    }
    if let Some(user) = &parts.user {
        url.push_str(user);
        if let Some(password) = &parts.password {
            url.push(':');
            url.push_str(password);
        }
        url.push('@');
    }
    if let Some(host) = &parts.host {
        url.push_str(host);
    }
    if let Some(port) = parts.port {
        url.push(':');
        url.push_str(&port.to_string());
    }
    if let Some(path) = &parts.path {
        url.push_str(path);
    }
    if let Some(query) = &parts.query {
        url.push('?');
        url.push_str(query);
    }
    if let Some(fragment) = &parts.fragment {
        url.push('#');
        url.push_str(fragment);
    }

    url
}

/// Returns true if and only if a URL is a relative URL.
///
/// Examples of relative URLs:
/// * /
/// * /foo
/// * ~/
/// * ~/foo
///
/// Counter examples:
/// * //
/// * /\
/// * https://www.example.com/
pub fn is_relative(url: &str) -> bool {
    let mut chars = url.chars();
    match chars.next() {
        Some('/') => !matches!(chars.next(), Some('/') | Some('\\')),
        Some('~') => chars.next() == Some('/'),
        _ => false,
    }
}
