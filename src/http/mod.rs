//! Backend API client subsystem.
//!
//! # Data Flow
//! ```text
//! ApiRequest (request.rs)
//!     → interceptor.rs (request hooks, in order)
//!     → client.rs (bind path to base URL)
//!     → transport.rs (reqwest, or any Transport)
//!     → client.rs (non-2xx becomes TransportError::Status)
//!     → interceptor.rs (response hooks, in order)
//!     → ApiResponse (response.rs) or TransportError
//! ```

pub mod client;
pub mod error;
pub mod interceptor;
pub mod request;
pub mod response;
pub mod transport;

pub use client::ApiClient;
pub use error::{TransportError, TransportResult};
pub use interceptor::{LoggingInterceptor, RequestInterceptor, ResponseInterceptor};
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use transport::{ReqwestTransport, Transport};
