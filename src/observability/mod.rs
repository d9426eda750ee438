//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator and API client produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and histograms via the metrics facade)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → whatever metrics recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a metrics recorder; without one, updates are no-ops
//! - Log level comes from `RUST_LOG` first, then configuration

pub mod logging;
pub mod metrics;
