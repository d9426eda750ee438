//! Component references attached to routes.
//!
//! # Responsibilities
//! - Identify the renderable unit behind a route
//! - Resolve eager components immediately
//! - Defer lazy components until first navigation, then cache them
//!
//! # Design Decisions
//! - A lazy loader is an async factory returning a boxed future
//! - A successful load is cached in a `OnceCell`; a failed load is not,
//!   so the next navigation tries again
//! - Dropping an in-flight load leaves the cell empty

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use thiserror::Error;
use tokio::sync::OnceCell;

/// A renderable page unit, identified by its view module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    view: Arc<str>,
}

impl Component {
    pub fn new(view: impl Into<Arc<str>>) -> Self {
        Self { view: view.into() }
    }

    /// View identifier, e.g. `views/big-data/CollectionView`.
    pub fn view(&self) -> &str {
        &self.view
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.view)
    }
}

/// Errors raised while fetching a deferred component.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The unit could not be fetched (e.g. network failure).
    #[error("failed to fetch component: {0}")]
    Fetch(String),

    /// The unit was fetched but does not exist.
    #[error("component not found: {0}")]
    NotFound(String),
}

/// Future produced by a lazy loader.
pub type LoadFuture = BoxFuture<'static, Result<Component, LoadError>>;

/// Async factory for a deferred component.
pub type Loader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// A component resolved on first use.
pub struct LazyComponent {
    loader: Loader,
    cell: OnceCell<Component>,
}

impl LazyComponent {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Component, LoadError>> + Send + 'static,
    {
        Self {
            loader: Arc::new(move || loader().boxed()),
            cell: OnceCell::new(),
        }
    }

    /// Load the component, or return the cached one.
    pub async fn get(&self) -> Result<Component, LoadError> {
        self.cell
            .get_or_try_init(|| (self.loader)())
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

impl fmt::Debug for LazyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyComponent")
            .field("loaded", &self.cell.get())
            .finish_non_exhaustive()
    }
}

/// How a route obtains its component.
#[derive(Debug)]
pub enum ComponentRef {
    /// Available at startup.
    Eager(Component),
    /// Fetched on first navigation.
    Lazy(LazyComponent),
}

impl ComponentRef {
    pub fn eager(view: impl Into<Arc<str>>) -> Self {
        ComponentRef::Eager(Component::new(view))
    }

    pub fn lazy<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Component, LoadError>> + Send + 'static,
    {
        ComponentRef::Lazy(LazyComponent::new(loader))
    }

    /// A deferred view bundled with the application: loading always succeeds.
    pub fn deferred(view: &'static str) -> Self {
        Self::lazy(move || async move { Ok(Component::new(view)) })
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ComponentRef::Lazy(_))
    }

    /// True once the component can be rendered without loading.
    pub fn is_ready(&self) -> bool {
        match self {
            ComponentRef::Eager(_) => true,
            ComponentRef::Lazy(lazy) => lazy.is_loaded(),
        }
    }

    pub async fn resolve(&self) -> Result<Component, LoadError> {
        match self {
            ComponentRef::Eager(component) => Ok(component.clone()),
            ComponentRef::Lazy(lazy) => lazy.get().await,
        }
    }
}
