//! Host dump adaptation
//!
//! Converts a JSON dump of a host router into a validated [`RouterNode`].
//! This is the only place that looks at raw shapes; every rejection
//! happens here, before any walking starts.
//!
//! # Dump format
//!
//! ```text
//! root    := router | { "_router": router }
//! router  := { "name": "router", "stack": [layer, ...] }
//! layer   := { "constructor": "Layer", "name": string, "regexp": string,
//!              "keys": [{ "name": string }, ...],
//!              "handle": router | handle, "route": route | null }
//! route   := { "path": string, "methods": { method: bool, "_all": bool },
//!              "stack": [layer, ...] }
//! handle  := { "description"?: string, "long_description"?: string,
//!              "hideInClimber"?: any }
//! ```
//!
//! Handler annotations are best-effort: a non-string description is
//! dropped, `hideInClimber` is read by truthiness, and a handle that is not
//! an object carries no annotations.

use super::node::{App, Layer, LayerKind, MethodSet, Route, RouterNode};
use crate::{
    ClimbError, ClimbResult, descriptor::HandlerInfo, pattern::PathPattern, types::Method,
};
use serde_json::Value;

const ROUTER_NAME: &str = "router";
const LAYER_CONSTRUCTOR: &str = "Layer";
const APP_ROUTER_KEY: &str = "_router";
const ALL_METHODS_KEY: &str = "_all";
const HIDDEN_KEY: &str = "hideInClimber";

/// Adapt a root dump, accepting either a router or an app wrapper.
#[tracing::instrument(level = "debug", skip_all)]
pub fn adapt_root(value: &Value) -> ClimbResult<RouterNode> {
    match value.get(APP_ROUTER_KEY) {
        Some(router) => adapt_router(router),
        None => adapt_router(value),
    }
}

/// Adapt an app wrapper dump.
pub fn adapt_app(value: &Value) -> ClimbResult<App> {
    let router = value
        .get(APP_ROUTER_KEY)
        .ok_or_else(|| ClimbError::unrecognized_node("app has no router", value))?;
    Ok(App::new(adapt_router(router)?))
}

/// Adapt a router dump.
pub fn adapt_router(value: &Value) -> ClimbResult<RouterNode> {
    if !is_router(value) {
        return Err(ClimbError::unrecognized_node("unknown router type", value));
    }
    let stack = value
        .get("stack")
        .and_then(Value::as_array)
        .ok_or_else(|| ClimbError::unrecognized_node("router has no layer stack", value))?;

    let layers = stack.iter().map(adapt_layer).collect::<ClimbResult<Vec<_>>>()?;
    Ok(RouterNode::new(layers))
}

/// Router-kind marker only; the stack is checked by [`adapt_router`].
fn is_router(value: &Value) -> bool {
    value.get("name").and_then(Value::as_str) == Some(ROUTER_NAME)
}

fn adapt_layer(value: &Value) -> ClimbResult<Layer> {
    if value.get("constructor").and_then(Value::as_str) != Some(LAYER_CONSTRUCTOR) {
        return Err(ClimbError::unrecognized_layer("unknown layer type", value));
    }
    let pattern = adapt_pattern(value)?;

    let handle = value.get("handle").unwrap_or(&Value::Null);
    if is_router(handle) {
        return Ok(Layer {
            pattern,
            kind: LayerKind::SubRouter(adapt_router(handle)?),
        });
    }

    let kind = match value.get("route") {
        Some(route) if !route.is_null() => LayerKind::Route(adapt_route(route)?),
        _ => LayerKind::Middleware(adapt_handler(value)),
    };
    Ok(Layer { pattern, kind })
}

fn adapt_pattern(value: &Value) -> ClimbResult<PathPattern> {
    let source = value
        .get("regexp")
        .and_then(Value::as_str)
        .ok_or_else(|| ClimbError::unrecognized_layer("layer has no path pattern", value))?;

    let keys = match value.get("keys") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(keys)) => keys
            .iter()
            .map(|key| {
                key.get("name")
                    .and_then(|name| match name {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .ok_or_else(|| ClimbError::unrecognized_layer("malformed path key", value))
            })
            .collect::<ClimbResult<Vec<_>>>()?,
        Some(_) => {
            return Err(ClimbError::unrecognized_layer(
                "layer keys are not a list",
                value,
            ));
        }
    };
    Ok(PathPattern::new(source, keys))
}

fn adapt_route(value: &Value) -> ClimbResult<Route> {
    let path = value
        .get("path")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut methods = MethodSet::default();
    if let Some(declared) = value.get("methods").and_then(Value::as_object) {
        for (name, enabled) in declared {
            if !is_truthy(enabled) {
                continue;
            }
            if name == ALL_METHODS_KEY {
                methods.all = true;
                continue;
            }
            match Method::parse(name) {
                Some(method) => methods.insert(method),
                None => tracing::debug!(method = %name, path = %path, "ignoring unsupported method"),
            }
        }
    }

    let stack = value
        .get("stack")
        .and_then(Value::as_array)
        .ok_or_else(|| ClimbError::unrecognized_layer("route has no handler stack", value))?
        .iter()
        .map(|layer| {
            if layer.get("constructor").and_then(Value::as_str) != Some(LAYER_CONSTRUCTOR) {
                return Err(ClimbError::unrecognized_layer("unknown layer type", layer));
            }
            Ok(adapt_handler(layer))
        })
        .collect::<ClimbResult<Vec<_>>>()?;

    Ok(Route {
        path,
        methods,
        stack,
    })
}

/// Never fails: annotations of the wrong type fall back to their defaults.
fn adapt_handler(layer: &Value) -> HandlerInfo {
    let handle = layer.get("handle").filter(|handle| handle.is_object());
    let annotation = |key: &str| {
        handle
            .and_then(|handle| handle.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    HandlerInfo {
        name: layer.get("name").and_then(Value::as_str).map(str::to_string),
        description: annotation("description"),
        long_description: annotation("long_description"),
        hidden: handle
            .and_then(|handle| handle.get(HIDDEN_KEY))
            .is_some_and(is_truthy),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
