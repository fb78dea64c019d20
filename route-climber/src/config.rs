//! Configuration module for route extraction.
//!
//! This module provides the [`ClimberConfig`] struct for customizing how a
//! router tree is flattened.
//!
//! # Example
//! ```rust,ignore
//! use route_climber::{AncestorMatch, ClimberConfig};
//!
//! let config = ClimberConfig::new()
//!     .with_base_path("/api")
//!     .with_ancestor_match(AncestorMatch::SegmentPrefix);
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker used for handlers that carry no identifier.
pub const ANONYMOUS_HANDLER: &str = "<anonymous>";

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// base_path must be empty or start with '/'
    BasePathNotAbsolute(String),
    /// base_path must not end with '/'
    BasePathTrailingSlash(String),
    /// anonymous_name must not be empty
    EmptyAnonymousName,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BasePathNotAbsolute(path) => {
                write!(f, "base_path '{}' must be empty or start with '/'", path)
            }
            Self::BasePathTrailingSlash(path) => {
                write!(f, "base_path '{}' must not end with '/'", path)
            }
            Self::EmptyAnonymousName => {
                write!(f, "anonymous_name must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// How the flattener decides that one URL is an ancestor of another.
///
/// # Variants
///
/// * `StringPrefix` - `/foo` is an ancestor of any URL that starts with the
///   characters `/foo`, including `/foobar`. This is the host router's
///   historical behaviour and the default.
///
/// * `SegmentPrefix` - `/foo` is an ancestor of `/foo/bar` but not of
///   `/foobar`. Opt-in only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum AncestorMatch {
    /// Literal `starts_with` test on the URL string.
    #[default]
    StringPrefix,
    /// Prefix must end on a path-segment boundary.
    SegmentPrefix,
}

impl AncestorMatch {
    /// Returns true if `ancestor` contributes middleware to `url`.
    ///
    /// The caller is responsible for excluding `ancestor == url`.
    pub fn is_ancestor(&self, ancestor: &str, url: &str) -> bool {
        if !url.starts_with(ancestor) {
            return false;
        }
        match self {
            Self::StringPrefix => true,
            Self::SegmentPrefix => {
                ancestor.ends_with('/')
                    || url.len() == ancestor.len()
                    || url.as_bytes()[ancestor.len()] == b'/'
            }
        }
    }
}

/// Extraction configuration.
///
/// All fields have defaults that reproduce the host router's own view of
/// its routes. Use [`ClimberConfig::default()`] to get them.
///
/// # Fields
///
/// * `base_path` - Prefix prepended to every extracted URL. Default: `""`.
///
/// * `anonymous_name` - Name reported for handlers without an identifier.
///   Default: `"<anonymous>"`.
///
/// * `ancestor_match` - Ancestor test used when inheriting middleware.
///   Default: [`AncestorMatch::StringPrefix`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimberConfig {
    /// Prefix applied to every URL (default: empty)
    pub base_path: String,
    /// Marker for unnamed handlers (default: "<anonymous>")
    pub anonymous_name: String,
    /// Ancestor test for middleware inheritance (default: StringPrefix)
    pub ancestor_match: AncestorMatch,
}

impl Default for ClimberConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            anonymous_name: ANONYMOUS_HANDLER.to_string(),
            ancestor_match: AncestorMatch::default(),
        }
    }
}

impl ClimberConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path prepended to every URL.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Set the name reported for unnamed handlers.
    pub fn with_anonymous_name(mut self, name: impl Into<String>) -> Self {
        self.anonymous_name = name.into();
        self
    }

    /// Set the ancestor test used by the flattener.
    pub fn with_ancestor_match(mut self, ancestor_match: AncestorMatch) -> Self {
        self.ancestor_match = ancestor_match;
        self
    }

    /// Check the configuration for values the walker cannot honour.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.base_path.is_empty() {
            if !self.base_path.starts_with('/') {
                return Err(ConfigValidationError::BasePathNotAbsolute(
                    self.base_path.clone(),
                ));
            }
            if self.base_path.ends_with('/') {
                return Err(ConfigValidationError::BasePathTrailingSlash(
                    self.base_path.clone(),
                ));
            }
        }
        if self.anonymous_name.is_empty() {
            return Err(ConfigValidationError::EmptyAnonymousName);
        }
        Ok(())
    }
}
