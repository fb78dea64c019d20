//! Error types for route extraction
//!
//! Every failure here is a contract violation by the caller: the input did
//! not look like a host router. There is no transient failure mode, so
//! nothing in this crate retries or falls back to a partial table.
//!
//! # Error Codes
//!
//! Error codes are represented by the [`ClimbErrorCode`] enum. When
//! serialized, codes are converted to SCREAMING_SNAKE_CASE strings.
//!
//! # Example
//! ```rust,ignore
//! use route_climber::{ClimbError, ClimbErrorCode};
//!
//! let error = ClimbError::unrecognized_layer("layer is not a Layer", &node);
//! assert_eq!(error.code, ClimbErrorCode::UnrecognizedLayerKind);
//! ```

use crate::config::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Type-safe error codes for route extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClimbErrorCode {
    /// The root or a nested aggregate is not router-like
    UnrecognizedNodeKind,
    /// A stack entry is neither middleware, route, nor sub-router
    UnrecognizedLayerKind,
    /// The extraction configuration failed validation
    InvalidConfig,
    /// JSON serialization/deserialization failed
    SerializationError,
    /// Reading a router dump failed
    IoError,
}

impl ClimbErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnrecognizedNodeKind => "UNRECOGNIZED_NODE_KIND",
            Self::UnrecognizedLayerKind => "UNRECOGNIZED_LAYER_KIND",
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }

    /// Returns true if the input itself was malformed (as opposed to the
    /// environment failing to deliver it).
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedNodeKind | Self::UnrecognizedLayerKind | Self::InvalidConfig
        )
    }
}

impl fmt::Display for ClimbErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extraction error with type-safe code and message.
///
/// Structural errors carry the offending host node so callers can report
/// exactly what was rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("[{code}] {message}")]
pub struct ClimbError {
    /// Type-safe error code
    pub code: ClimbErrorCode,
    /// Human-readable error message
    pub message: String,
    /// The host node that was rejected, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<serde_json::Value>,
}

impl ClimbError {
    /// Create a new error with code and message.
    pub fn new(code: ClimbErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            node: None,
        }
    }

    /// Attach the offending node to the error.
    pub fn with_node(mut self, node: serde_json::Value) -> Self {
        self.node = Some(node);
        self
    }

    /// Create an UNRECOGNIZED_NODE_KIND error.
    pub fn unrecognized_node(message: impl Into<String>, node: &serde_json::Value) -> Self {
        Self::new(ClimbErrorCode::UnrecognizedNodeKind, message).with_node(node.clone())
    }

    /// Create an UNRECOGNIZED_LAYER_KIND error.
    pub fn unrecognized_layer(message: impl Into<String>, node: &serde_json::Value) -> Self {
        Self::new(ClimbErrorCode::UnrecognizedLayerKind, message).with_node(node.clone())
    }

    /// Create an INVALID_CONFIG error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ClimbErrorCode::InvalidConfig, message)
    }

    /// Create a SERIALIZATION_ERROR error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ClimbErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for ClimbError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ClimbError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ClimbErrorCode::IoError, format!("IO error: {}", err))
    }
}

impl From<ConfigValidationError> for ClimbError {
    fn from(err: ConfigValidationError) -> Self {
        Self::invalid_config(err.to_string())
    }
}

/// Result type alias for route extraction.
pub type ClimbResult<T> = Result<T, ClimbError>;
