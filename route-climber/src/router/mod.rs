//! Host router model
//!
//! The host routing component is external; this module is its boundary.
//!
//! # Building in Rust
//!
//! ```rust,ignore
//! let router = Router::new()
//!     .use_middleware("middleware1")
//!     .get("/foo", ["middleware2", "getFooHandle"])
//!     .mount("/sub", Router::new().post("/bar", ["postBarHandle"]));
//! ```
//!
//! # Adapting a host dump
//!
//! ```rust,ignore
//! let dump: serde_json::Value = serde_json::from_str(&text)?;
//! let root = adapt_root(&dump)?; // rejects anything that is not a router
//! ```

mod adapt;
mod builder;
mod node;

pub use adapt::{adapt_app, adapt_root, adapt_router};
pub use builder::Router;
pub use node::{App, AsRouter, Layer, LayerKind, MethodSet, Route, RouterNode};

#[cfg(test)]
mod tests;
