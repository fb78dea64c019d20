//! Prefix inheritance flattening
//!
//! Turns a [`RouteTable`] into the array form. Each terminal (URL, method)
//! pair inherits the middleware recorded for the same method at every
//! ancestor URL, prepended ahead of its own chain.
//!
//! Ancestors are found by scanning every URL in the table, so a flatten is
//! quadratic in the number of URLs. Multiple qualifying ancestors are
//! applied in table order, each one prepended in turn; they are not sorted
//! by depth.

use crate::{
    config::ClimberConfig,
    types::{FlatRouteRecord, MiddlewareDescriptor, Method, RouteTable},
};

/// Resolve every terminal route in `table` into a flat record.
///
/// Pure: the table is only read, and output order follows table order.
pub fn flatten(table: &RouteTable, config: &ClimberConfig) -> Vec<FlatRouteRecord> {
    let mut records = Vec::with_capacity(table.terminal_count());

    for (url, methods) in table.iter() {
        for (method, entry) in methods {
            let Some(handler) = &entry.handler else {
                continue;
            };
            records.push(FlatRouteRecord {
                url: url.to_string(),
                method: *method,
                middlewares: inherited_chain(table, url, *method, &entry.middlewares, config),
                handler: Some(handler.clone()),
            });
        }
    }

    tracing::debug!(
        urls = table.len(),
        records = records.len(),
        "flattened route table"
    );
    records
}

fn inherited_chain(
    table: &RouteTable,
    url: &str,
    method: Method,
    own: &[MiddlewareDescriptor],
    config: &ClimberConfig,
) -> Vec<MiddlewareDescriptor> {
    let mut chain = own.to_vec();
    for (other, other_methods) in table.iter() {
        if other == url || !config.ancestor_match.is_ancestor(other, url) {
            continue;
        }
        let Some(ancestor) = other_methods.get(&method) else {
            continue;
        };
        tracing::trace!(url = %url, ancestor = %other, method = %method, "inheriting middleware");
        let mut prefixed = ancestor.middlewares.clone();
        prefixed.append(&mut chain);
        chain = prefixed;
    }
    chain
}
