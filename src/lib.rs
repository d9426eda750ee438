//! Agricultural management portal shell.
//!
//! Route table and navigator for the portal's pages, the backend API client,
//! and the video player contract.

pub mod config;
pub mod http;
pub mod observability;
pub mod player;
pub mod routing;

pub use config::ShellConfig;
pub use http::ApiClient;
pub use routing::{Navigator, RouteTable};
