//! Middleware descriptor extraction

use crate::types::MiddlewareDescriptor;
use serde::{Deserialize, Serialize};

/// A handler or middleware function as the host router exposes it.
///
/// Only the metadata is kept; the function itself never runs here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerInfo {
    /// Function identifier, if the host knows one
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    /// Excluded from extraction output (still executes at request time)
    #[serde(default, rename = "hideInClimber")]
    pub hidden: bool,
}

impl HandlerInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = Some(long_description.into());
        self
    }

    /// Hide this handler from extraction output.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Build the documentation record for this handler.
    ///
    /// Position-unaware: honouring [`HandlerInfo::hidden`] is the walker's job.
    pub fn describe(&self, anonymous_name: &str) -> MiddlewareDescriptor {
        MiddlewareDescriptor {
            name: self
                .name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(anonymous_name)
                .to_string(),
            description: self.description.clone(),
            long_description: self.long_description.clone(),
        }
    }
}

impl From<&str> for HandlerInfo {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for HandlerInfo {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/// Describe every visible handler in `stack`, in order.
pub fn describe_visible<'a>(
    stack: impl IntoIterator<Item = &'a HandlerInfo>,
    anonymous_name: &str,
) -> Vec<MiddlewareDescriptor> {
    stack
        .into_iter()
        .filter(|handler| !handler.hidden)
        .map(|handler| handler.describe(anonymous_name))
        .collect()
}
