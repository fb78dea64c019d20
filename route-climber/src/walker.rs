//! Router tree walking
//!
//! Flattens a nested router into a [`RouteTable`] in a single depth-first
//! pass. Layers are visited in declaration order, so middleware lists come
//! out in execution order: outer router before inner router before the
//! route's own stack.

use crate::{
    config::ClimberConfig,
    descriptor::describe_visible,
    pattern::join_path,
    router::{Layer, LayerKind, Route, RouterNode},
    types::{Method, RouteTable},
};

/// Walk `node`, recording every reachable (URL, method) pair in `table`.
///
/// `base_path` is the URL the node is mounted at (`""` for the root).
pub fn walk(node: &RouterNode, base_path: &str, table: &mut RouteTable, config: &ClimberConfig) {
    for layer in &node.layers {
        walk_layer(layer, base_path, table, config);
    }
}

fn walk_layer(layer: &Layer, base_path: &str, table: &mut RouteTable, config: &ClimberConfig) {
    let url = join_path(base_path, &layer.pattern.decode());
    tracing::trace!(url = %url, kind = layer.kind.as_str(), "visiting layer");

    match &layer.kind {
        LayerKind::SubRouter(child) => walk(child, &url, table, config),
        LayerKind::Middleware(handler) => {
            let descriptor = (!handler.hidden).then(|| handler.describe(&config.anonymous_name));
            for method in Method::ALL {
                let entry = table.entry_mut(&url, method);
                if let Some(descriptor) = &descriptor {
                    entry.middlewares.push(descriptor.clone());
                }
            }
        }
        LayerKind::Route(route) => record_route(route, &url, table, config),
    }
}

fn record_route(route: &Route, url: &str, table: &mut RouteTable, config: &ClimberConfig) {
    table.touch(url);
    for method in route.methods.expand() {
        let mut middlewares = describe_visible(&route.stack, &config.anonymous_name);
        let handler = middlewares.pop();
        let entry = table.entry_mut(url, method);
        entry.middlewares = middlewares;
        entry.handler = handler;
    }
}
