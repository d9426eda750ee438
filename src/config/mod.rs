//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → handed to the API client, navigator and logging setup
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so no file at all is a valid configuration
//! - Validation separates syntactic (serde) from semantic checks
//! - The route table is code, not configuration

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{HttpConfig, ObservabilityConfig, RoutingConfig, ShellConfig};
pub use validation::{validate_config, ValidationError};
