//! # Route Climber
//!
//! Describes every reachable URL of an already-built HTTP router: the
//! methods it accepts, the ordered middleware that runs before the
//! terminal handler, and the handler itself.
//!
//! ## Overview
//!
//! ```text
//! host router ──► adapt_root ──► RouterNode ──► walk ──► RouteTable ──► flatten ──► [FlatRouteRecord]
//!   (JSON dump)     (validate)     (closed enum)          (structure form)          (array form)
//! ```
//!
//! - **Pattern decoding** turns the host's serialized matchers back into
//!   literal paths with `:name` parameters.
//! - **Walking** flattens nested routers into a [`RouteTable`], keyed by
//!   URL then method, in declaration order.
//! - **Flattening** gives each terminal route the middleware declared on
//!   every ancestor URL.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use route_climber::prelude::*;
//!
//! let router = Router::new()
//!     .use_middleware("middleware1")
//!     .get("/foo", ["middleware2", "getFooHandle"]);
//!
//! let records = array(&router, &ClimberConfig::default());
//! assert_eq!(records[0].url, "/foo");
//! assert_eq!(records[0].middlewares.len(), 2);
//! ```
//!
//! From a host dump:
//!
//! ```rust,ignore
//! let dump: serde_json::Value = serde_json::from_str(&text)?;
//! let table = structure_from_value(&dump, &ClimberConfig::default())?;
//! println!("{}", serde_json::to_string_pretty(&table)?);
//! ```

pub mod config;
pub mod descriptor;
mod error;
pub mod flatten;
pub mod pattern;
pub mod router;
pub mod types;
pub mod walker;

#[cfg(test)]
mod tests;

pub use config::{ANONYMOUS_HANDLER, AncestorMatch, ClimberConfig, ConfigValidationError};
pub use descriptor::HandlerInfo;
pub use error::{ClimbError, ClimbErrorCode, ClimbResult};
pub use flatten::flatten;
pub use pattern::{PathPattern, decode_pattern};
pub use router::{
    App, AsRouter, Layer, LayerKind, MethodSet, Route, Router, RouterNode, adapt_root,
};
pub use types::{FlatRouteRecord, Method, MethodMap, MiddlewareDescriptor, RouteEntry, RouteTable};
pub use walker::walk;

/// Extract the structure form of `root`.
///
/// `config` is used as given; call [`ClimberConfig::validate`] first if it
/// comes from user input. The `*_from_value` entry points do this for you.
#[tracing::instrument(level = "debug", skip_all, fields(base = %config.base_path))]
pub fn structure(root: &impl AsRouter, config: &ClimberConfig) -> RouteTable {
    debug_assert!(config.validate().is_ok(), "invalid config: {:?}", config);
    let mut table = RouteTable::new();
    walk(root.as_router(), &config.base_path, &mut table, config);
    tracing::debug!(
        urls = table.len(),
        terminal = table.terminal_count(),
        "walked router tree"
    );
    table
}

/// Extract the array form of `root`. `config` must already be valid.
pub fn array(root: &impl AsRouter, config: &ClimberConfig) -> Vec<FlatRouteRecord> {
    flatten(&structure(root, config), config)
}

/// Adapt a host dump and extract its structure form.
///
/// Fails if the config is invalid or the dump is not router-shaped; no
/// partial table is ever returned.
pub fn structure_from_value(
    value: &serde_json::Value,
    config: &ClimberConfig,
) -> ClimbResult<RouteTable> {
    config.validate()?;
    let root = adapt_root(value)?;
    Ok(structure(&root, config))
}

/// Adapt a host dump and extract its array form.
pub fn array_from_value(
    value: &serde_json::Value,
    config: &ClimberConfig,
) -> ClimbResult<Vec<FlatRouteRecord>> {
    let table = structure_from_value(value, config)?;
    Ok(flatten(&table, config))
}

/// Common imports.
pub mod prelude {
    pub use crate::{
        AncestorMatch, App, AsRouter, ClimbError, ClimbErrorCode, ClimbResult, ClimberConfig,
        FlatRouteRecord, HandlerInfo, Method, MethodSet, MiddlewareDescriptor, RouteEntry,
        RouteTable, Router, RouterNode, array, array_from_value, flatten, structure,
        structure_from_value, walk,
    };
}
