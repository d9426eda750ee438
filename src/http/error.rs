//! Transport error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL could not be built.
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The underlying client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// The request exceeded its deadline.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Connection or protocol failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: StatusCode, body: String },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// An interceptor rejected the request or response.
    #[error("rejected by interceptor: {0}")]
    Rejected(String),
}

/// Result type for API operations.
pub type TransportResult<T> = Result<T, TransportError>;
