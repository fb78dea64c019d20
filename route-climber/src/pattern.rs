//! Path pattern decoding
//!
//! The host router stores every mount point and route as a serialized
//! matcher expression, e.g. `/^\/users\/(?:([^\/]+?))\/?$/i`. This module
//! turns that back into the literal URL it was compiled from
//! (`/users/:id`), and compiles literal paths into the same form for
//! routers assembled in Rust.
//!
//! All assumptions about the serialized form live here; the walker only
//! ever sees decoded paths.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Capture group the host emits for one `:name` segment, after separator
/// unescaping.
pub const PARAM_PLACEHOLDER: &str = "(?:([^/]+?))";

/// Capture group as it appears in the compiled (escaped) pattern.
const ESCAPED_PARAM_PLACEHOLDER: &str = r"(?:([^\/]+?))";

static MOUNT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?\(\?=\\/\|\$\)/\w?$").expect("static regex"));

static ROUTE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?\$/\w?$").expect("static regex"));

/// Serialized matcher plus the parameter names it captures, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPattern {
    pub source: String,
    #[serde(default)]
    pub keys: Vec<String>,
}

impl PathPattern {
    pub fn new(source: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            source: source.into(),
            keys,
        }
    }

    /// Compile a route path (matches the whole URL).
    pub fn route(path: &str) -> Self {
        let (body, keys) = compile_body(path);
        Self::new(format!(r"/^{}\/?$/i", body), keys)
    }

    /// Compile a mount path (matches a URL prefix).
    pub fn mount(path: &str) -> Self {
        let (body, keys) = compile_body(path);
        Self::new(format!(r"/^{}\/?(?=\/|$)/i", body), keys)
    }

    /// Decode back to a literal path with `:name` parameters.
    pub fn decode(&self) -> String {
        decode_pattern(&self.source, &self.keys)
    }
}

/// Decode a serialized matcher into the URL path it represents.
///
/// Anchors and the optional trailing separator are removed, escaped
/// separators become plain `/`, and each capture placeholder is replaced
/// by `:<key>` in positional order. Placeholders beyond the supplied keys
/// are left as-is. An empty result is the root path `/`.
pub fn decode_pattern(source: &str, keys: &[String]) -> String {
    let stripped = source.strip_prefix("/^").unwrap_or(source);
    let stripped = MOUNT_SUFFIX.replace(stripped, "");
    let stripped = ROUTE_SUFFIX.replace(&stripped, "");
    let unescaped = stripped.replace(r"\/", "/");
    let trimmed = unescaped.strip_suffix('/').unwrap_or(&unescaped);

    let mut url = String::with_capacity(trimmed.len());
    let mut rest = trimmed;
    let mut keys = keys.iter();
    while let Some(pos) = rest.find(PARAM_PLACEHOLDER) {
        let Some(key) = keys.next() else {
            break;
        };
        url.push_str(&rest[..pos]);
        url.push(':');
        url.push_str(key);
        rest = &rest[pos + PARAM_PLACEHOLDER.len()..];
    }
    url.push_str(rest);

    if url.is_empty() {
        "/".to_string()
    } else {
        url
    }
}

/// Append a decoded segment to a base path.
///
/// `/` as a segment means "the base itself"; an empty or `/` base means
/// the root.
pub fn join_path(base: &str, segment: &str) -> String {
    match (base, segment) {
        ("", "/") | ("/", "/") => "/".to_string(),
        (_, "/") => base.to_string(),
        ("" | "/", _) => segment.to_string(),
        _ => format!("{}{}", base, segment),
    }
}

fn compile_body(path: &str) -> (String, Vec<String>) {
    let mut body = String::new();
    let mut keys = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        body.push_str(r"\/");
        match segment.strip_prefix(':') {
            Some(name) => {
                body.push_str(ESCAPED_PARAM_PLACEHOLDER);
                keys.push(name.to_string());
            }
            None => body.push_str(segment),
        }
    }
    (body, keys)
}
