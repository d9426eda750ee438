//! Routing error definitions.

use thiserror::Error;

use crate::routing::component::LoadError;

/// Errors raised while navigating.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// No declared route matches the requested path.
    #[error("no route matches path '{path}'")]
    NoMatch { path: String },

    /// Programmatic navigation named a route that does not exist.
    #[error("unknown route name '{0}'")]
    UnknownRoute(String),

    /// Programmatic navigation omitted a dynamic segment.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    /// A lazily loaded component failed to resolve.
    #[error("failed to load component for route '{route}': {source}")]
    ComponentLoad {
        route: String,
        #[source]
        source: LoadError,
    },

    /// A newer navigation started before this one committed.
    #[error("navigation to '{path}' was superseded")]
    Superseded { path: String },
}

impl NavigationError {
    /// Label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationError::NoMatch { .. } => "no_match",
            NavigationError::UnknownRoute(_) => "unknown_route",
            NavigationError::MissingParam { .. } => "missing_param",
            NavigationError::ComponentLoad { .. } => "load_failed",
            NavigationError::Superseded { .. } => "superseded",
        }
    }
}

/// Result type for navigation.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Errors raised while building a route table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route name '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("routes '{first}' and '{second}' both resolve to '{path}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("route '{name}' has invalid path '{path}': {reason}")]
    InvalidPath {
        name: String,
        path: String,
        reason: String,
    },
}
