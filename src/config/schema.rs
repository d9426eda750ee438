//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Backend API client settings.
    pub http: HttpConfig,

    /// Where the portal is mounted.
    pub routing: RoutingConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Backend API client configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Base address prepended to relative request paths.
    pub base_url: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Default `Content-Type` header.
    pub content_type: String,

    /// Honour `HTTP_PROXY` and friends from the environment.
    pub use_system_proxy: bool,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_ms: 5000,
            content_type: "application/json".to_string(),
            use_system_proxy: true,
        }
    }
}

/// Routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    /// Path prefix the portal is served under, e.g. `/portal`.
    /// Stripped before resolving and prepended to generated links.
    pub base: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Colored output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "agri_shell=info".to_string(),
            ansi: true,
        }
    }
}
