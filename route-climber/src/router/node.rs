//! Host router model
//!
//! A closed description of the three layer kinds a host router can hold.
//! Anything that reaches these types has already been validated, so the
//! walker dispatches on [`LayerKind`] without inspecting shapes.

use crate::{descriptor::HandlerInfo, pattern::PathPattern, types::Method};

/// Router-like aggregate: an ordered stack of layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterNode {
    pub layers: Vec<Layer>,
}

impl RouterNode {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// One entry in a router's stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Mount path or route path, in the host's serialized form
    pub pattern: PathPattern,
    pub kind: LayerKind,
}

/// The three things a layer can be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerKind {
    /// Middleware attached directly to the router, for every method
    Middleware(HandlerInfo),
    /// Terminal route with its own handler stack
    Route(Route),
    /// Nested router mounted at the layer's path
    SubRouter(RouterNode),
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Middleware(_) => "middleware",
            Self::Route(_) => "route",
            Self::SubRouter(_) => "router",
        }
    }
}

/// A route declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path as declared, for diagnostics only
    pub path: String,
    pub methods: MethodSet,
    /// Handlers in declaration order; the last visible one is terminal
    pub stack: Vec<HandlerInfo>,
}

/// Methods a route answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    /// "All methods" marker; overrides `methods`
    pub all: bool,
    pub methods: Vec<Method>,
}

impl MethodSet {
    pub fn only(method: Method) -> Self {
        Self {
            all: false,
            methods: vec![method],
        }
    }

    pub fn all() -> Self {
        Self {
            all: true,
            methods: Vec::new(),
        }
    }

    pub fn insert(&mut self, method: Method) {
        if !self.methods.contains(&method) {
            self.methods.push(method);
        }
    }

    /// Concrete methods, with the all-methods marker expanded.
    pub fn expand(&self) -> Vec<Method> {
        if self.all {
            Method::ALL.to_vec()
        } else {
            self.methods.clone()
        }
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut set = Self::default();
        for method in iter {
            set.insert(method);
        }
        set
    }
}

/// Application-like wrapper that owns the root router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct App {
    pub router: RouterNode,
}

impl App {
    pub fn new(router: impl Into<RouterNode>) -> Self {
        Self {
            router: router.into(),
        }
    }
}

/// Anything that can hand the walker a root router.
pub trait AsRouter {
    fn as_router(&self) -> &RouterNode;
}

impl AsRouter for RouterNode {
    fn as_router(&self) -> &RouterNode {
        self
    }
}

impl AsRouter for App {
    fn as_router(&self) -> &RouterNode {
        &self.router
    }
}

impl<T: AsRouter + ?Sized> AsRouter for &T {
    fn as_router(&self) -> &RouterNode {
        (**self).as_router()
    }
}
