//! Declarative route descriptors.

use std::future::Future;

use crate::routing::component::{Component, ComponentRef, LoadError};

/// One addressable location, as declared.
///
/// `path` is absolute (`/dashboard`) for top-level routes and relative
/// (`overview`) for children. An empty child path declares the index route.
#[derive(Debug)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub component: ComponentRef,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: ComponentRef) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
            children: Vec::new(),
        }
    }

    /// Route whose component is available at startup.
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: &'static str) -> Self {
        Self::new(path, name, ComponentRef::eager(view))
    }

    /// Route whose component is fetched by `loader` on first navigation.
    pub fn lazy<F, Fut>(path: impl Into<String>, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Component, LoadError>> + Send + 'static,
    {
        Self::new(path, name, ComponentRef::lazy(loader))
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}
