//! Router builder
//!
//! Assembles a [`RouterNode`] in Rust with the same layer layout and
//! pattern form the host router produces, so trees built here and trees
//! adapted from a host dump walk identically.

use super::node::{AsRouter, Layer, LayerKind, MethodSet, Route, RouterNode};
use crate::{descriptor::HandlerInfo, pattern::PathPattern, types::Method};

/// Fluent builder for a host-style router.
///
/// # Example
/// ```rust,ignore
/// let users = Router::new()
///     .use_middleware("authenticate")
///     .get("/:id", ["loadUser", "getUser"]);
///
/// let root = Router::new()
///     .use_middleware("requestId")
///     .mount("/users", users)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    node: RouterNode,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach middleware at the router root.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn use_middleware(self, handler: impl Into<HandlerInfo>) -> Self {
        self.use_at("/", handler)
    }

    /// Attach middleware under `path`.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn use_at(mut self, path: &str, handler: impl Into<HandlerInfo>) -> Self {
        self.node.layers.push(Layer {
            pattern: PathPattern::mount(path),
            kind: LayerKind::Middleware(handler.into()),
        });
        self
    }

    /// Mount a child router under `path`.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn mount(mut self, path: &str, child: impl Into<RouterNode>) -> Self {
        self.node.layers.push(Layer {
            pattern: PathPattern::mount(path),
            kind: LayerKind::SubRouter(child.into()),
        });
        self
    }

    /// Declare a route answering `methods` with the given handler stack.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn route<I, H>(mut self, path: &str, methods: MethodSet, stack: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HandlerInfo>,
    {
        self.node.layers.push(Layer {
            pattern: PathPattern::route(path),
            kind: LayerKind::Route(Route {
                path: path.to_string(),
                methods,
                stack: stack.into_iter().map(Into::into).collect(),
            }),
        });
        self
    }

    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn get<I, H>(self, path: &str, stack: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HandlerInfo>,
    {
        self.route(path, MethodSet::only(Method::Get), stack)
    }

    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn post<I, H>(self, path: &str, stack: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HandlerInfo>,
    {
        self.route(path, MethodSet::only(Method::Post), stack)
    }

    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn put<I, H>(self, path: &str, stack: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HandlerInfo>,
    {
        self.route(path, MethodSet::only(Method::Put), stack)
    }

    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn delete<I, H>(self, path: &str, stack: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HandlerInfo>,
    {
        self.route(path, MethodSet::only(Method::Delete), stack)
    }

    /// Declare a route answering every method.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn all<I, H>(self, path: &str, stack: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HandlerInfo>,
    {
        self.route(path, MethodSet::all(), stack)
    }

    pub fn build(self) -> RouterNode {
        self.node
    }
}

impl From<Router> for RouterNode {
    fn from(router: Router) -> Self {
        router.node
    }
}

impl AsRouter for Router {
    fn as_router(&self) -> &RouterNode {
        &self.node
    }
}
