//! Route table types
//!
//! These types are the serializable output of an extraction. The structure
//! form is [`RouteTable`] (URL, then method); the array form is a list of
//! [`FlatRouteRecord`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods tracked by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Every supported method, in the order bare middleware is recorded.
    pub const ALL: [Method; 4] = [Method::Get, Method::Post, Method::Put, Method::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    /// Parse a host method name. Case-insensitive; unsupported names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Documentation record for one middleware or handler.
///
/// Two descriptors are equal iff name, description and long description
/// all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MiddlewareDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

impl MiddlewareDescriptor {
    /// Descriptor carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            long_description: None,
        }
    }
}

/// What runs for one (URL, method) pair.
///
/// An entry without a `handler` is bare middleware attached to a router
/// rather than a terminal route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Execution order, outermost first
    pub middlewares: Vec<MiddlewareDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<MiddlewareDescriptor>,
}

impl RouteEntry {
    /// Returns true if this entry ends in a terminal handler.
    pub fn is_terminal(&self) -> bool {
        self.handler.is_some()
    }
}

/// Entries for one URL, keyed by method.
pub type MethodMap = IndexMap<Method, RouteEntry>;

/// Structure form of an extraction: URL, then method, then entry.
///
/// Keys keep insertion order, which is the order the walker first reached
/// each URL and method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    urls: IndexMap<String, MethodMap>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the entry for `(url, method)`.
    pub fn entry_mut(&mut self, url: &str, method: Method) -> &mut RouteEntry {
        self.urls
            .entry(url.to_string())
            .or_default()
            .entry(method)
            .or_default()
    }

    /// Make sure `url` has a (possibly empty) method map.
    pub(crate) fn touch(&mut self, url: &str) {
        self.urls.entry(url.to_string()).or_default();
    }

    pub fn get(&self, url: &str, method: Method) -> Option<&RouteEntry> {
        self.urls.get(url).and_then(|methods| methods.get(&method))
    }

    pub fn methods(&self, url: &str) -> Option<&MethodMap> {
        self.urls.get(url)
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.urls.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MethodMap)> {
        self.urls.iter().map(|(url, methods)| (url.as_str(), methods))
    }

    /// Number of distinct URLs.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Number of (URL, method) pairs that end in a terminal handler.
    pub fn terminal_count(&self) -> usize {
        self.urls
            .values()
            .flat_map(|methods| methods.values())
            .filter(|entry| entry.is_terminal())
            .count()
    }
}

/// Array form of an extraction: one fully resolved (URL, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRouteRecord {
    pub url: String,
    pub method: Method,
    /// Inherited and own middleware, outermost first
    pub middlewares: Vec<MiddlewareDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<MiddlewareDescriptor>,
}
