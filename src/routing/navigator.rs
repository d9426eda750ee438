//! Navigation and current-route state.
//!
//! # Responsibilities
//! - Resolve a requested path against the route table
//! - Await lazy components of the matched stack
//! - Commit the resulting snapshot as the current route
//! - Publish snapshots to subscribers (breadcrumbs, menus)
//!
//! # Design Decisions
//! - Last navigation wins: each navigation takes a ticket; only the latest
//!   ticket may commit, checked under the state lock
//! - A superseded navigation stops awaiting its loads and reports
//!   `Superseded`; its loads are dropped and retried on the next visit
//! - Failed navigations never touch the current route
//! - Requested paths carry the mount base; snapshots and the route table
//!   never do

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{watch, Notify};

use crate::observability::metrics;
use crate::routing::component::Component;
use crate::routing::error::{NavigationError, NavigationResult};
use crate::routing::matcher::{canonical, join_paths, normalize, Params};
use crate::routing::table::{RouteMatch, RouteTable};

/// Snapshot of the committed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    /// Normalized path that was navigated to, without the mount base.
    pub path: String,
    /// Name of the leaf route.
    pub name: String,
    pub params: Params,
    /// Route names from root to leaf.
    pub matched: Vec<String>,
    /// Components for each layout slot, root to leaf.
    pub components: Vec<Component>,
    /// Ticket of the navigation that committed this snapshot.
    pub navigation_id: u64,
}

/// Receiver of current-route snapshots.
pub type RouteReceiver = watch::Receiver<Option<Arc<CurrentRoute>>>;

/// Drives navigation over an immutable route table.
pub struct Navigator {
    table: Arc<RouteTable>,
    base: String,
    latest: AtomicU64,
    superseded: Notify,
    state: watch::Sender<Option<Arc<CurrentRoute>>>,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self::with_base(table, "/")
    }

    /// Navigator for a portal mounted under `base`, e.g. `/portal`.
    pub fn with_base(table: Arc<RouteTable>, base: &str) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            table,
            base: canonical(base),
            latest: AtomicU64::new(0),
            superseded: Notify::new(),
            state,
        }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Link to a named route, including the mount base.
    pub fn href(&self, name: &str, params: &Params) -> NavigationResult<String> {
        let path = self.table.path_for(name, params)?;
        Ok(join_paths(&self.base, &path))
    }

    /// The committed route, if any navigation has succeeded.
    pub fn current(&self) -> Option<Arc<CurrentRoute>> {
        self.state.borrow().clone()
    }

    /// Subscribe to committed snapshots.
    pub fn subscribe(&self) -> RouteReceiver {
        self.state.subscribe()
    }

    /// Navigate to an absolute path under the mount base.
    pub async fn navigate(&self, path: &str) -> NavigationResult<Arc<CurrentRoute>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.superseded.notify_waiters();

        tracing::debug!(navigation_id = ticket, path = %path, "Navigation started");

        let result = self.run(ticket, path).await;
        match &result {
            Ok(current) => {
                metrics::record_navigation("committed");
                tracing::info!(
                    navigation_id = ticket,
                    path = %current.path,
                    route = %current.name,
                    "Navigation committed"
                );
            }
            Err(NavigationError::Superseded { .. }) => {
                metrics::record_navigation("superseded");
                tracing::debug!(navigation_id = ticket, path = %path, "Navigation superseded");
            }
            Err(e) => {
                metrics::record_navigation(e.kind());
                tracing::warn!(navigation_id = ticket, path = %path, error = %e, "Navigation failed");
            }
        }
        result
    }

    /// Navigate to a route by name.
    pub async fn navigate_named(
        &self,
        name: &str,
        params: &Params,
    ) -> NavigationResult<Arc<CurrentRoute>> {
        let path = self.href(name, params)?;
        self.navigate(&path).await
    }

    async fn run(&self, ticket: u64, path: &str) -> NavigationResult<Arc<CurrentRoute>> {
        let route_match = match self.strip_base(path) {
            Some(local) => self.table.resolve(&local)?,
            None => {
                return Err(NavigationError::NoMatch {
                    path: canonical(path),
                })
            }
        };
        let components = self.load_components(ticket, &route_match).await?;

        let RouteMatch {
            path,
            name,
            params,
            matched,
        } = route_match;
        let snapshot = Arc::new(CurrentRoute {
            path,
            name,
            params,
            matched: matched.into_iter().map(|m| m.name).collect(),
            components,
            navigation_id: ticket,
        });

        let committed = self.state.send_if_modified(|current| {
            if self.latest.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *current = Some(snapshot.clone());
            true
        });

        if committed {
            Ok(snapshot)
        } else {
            Err(NavigationError::Superseded {
                path: snapshot.path.clone(),
            })
        }
    }

    async fn load_components(
        &self,
        ticket: u64,
        route_match: &RouteMatch,
    ) -> NavigationResult<Vec<Component>> {
        let mut components = Vec::with_capacity(route_match.matched.len());

        for matched in &route_match.matched {
            let component = self.table.node(matched.id).component();
            if component.is_ready() {
                components.push(component.resolve().await.map_err(|source| {
                    NavigationError::ComponentLoad {
                        route: matched.name.clone(),
                        source,
                    }
                })?);
                continue;
            }

            let start = Instant::now();
            tracing::debug!(route = %matched.name, "Loading component");
            let loaded = tokio::select! {
                loaded = component.resolve() => loaded,
                _ = self.wait_superseded(ticket) => {
                    return Err(NavigationError::Superseded {
                        path: route_match.path.clone(),
                    });
                }
            };
            metrics::record_component_load(&matched.name, start);

            let component = loaded.map_err(|source| NavigationError::ComponentLoad {
                route: matched.name.clone(),
                source,
            })?;
            components.push(component);
        }

        Ok(components)
    }

    /// Path relative to the mount base, or `None` when outside it.
    fn strip_base(&self, path: &str) -> Option<String> {
        let base = normalize(&self.base);
        let segments = normalize(path);
        let rest = segments.strip_prefix(base.as_slice())?;
        Some(format!("/{}", rest.join("/")))
    }

    /// Resolves once a navigation newer than `ticket` has started.
    async fn wait_superseded(&self, ticket: u64) {
        loop {
            let notified = self.superseded.notified();
            if self.latest.load(Ordering::SeqCst) != ticket {
                return;
            }
            notified.await;
        }
    }
}
