//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     Route tree (manifest.rs)
//!     → table.rs (validate names and paths, build arena)
//!     → Freeze as immutable RouteTable, shared via Arc
//!
//! Navigation:
//!     requested path
//!     → matcher.rs (normalize, match segments)
//!     → table.rs (pick most specific root-to-leaf stack)
//!     → component.rs (await lazy components)
//!     → navigator.rs (commit snapshot if still the latest navigation)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in the matching path
//! - Deterministic: same input always matches the same stack
//! - Last navigation wins

pub mod component;
pub mod error;
pub mod manifest;
pub mod matcher;
pub mod navigator;
pub mod route;
pub mod table;

pub use component::{Component, ComponentRef, LoadError};
pub use error::{NavigationError, NavigationResult, RouteTableError};
pub use manifest::{app_routes, app_routes_with};
pub use matcher::Params;
pub use navigator::{CurrentRoute, Navigator, RouteReceiver};
pub use route::Route;
pub use table::{FlatRoute, MatchedRoute, RouteId, RouteMatch, RouteNode, RouteTable};
