//! Request and response interceptors.
//!
//! Interceptors run in registration order. Once a hook fails, the remaining
//! interceptors see the error through their `*_error` hook and may recover.

use crate::http::error::{TransportError, TransportResult};
use crate::http::request::ApiRequest;
use crate::http::response::ApiResponse;

/// Hook invoked before a request is sent.
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: ApiRequest) -> TransportResult<ApiRequest> {
        Ok(request)
    }

    fn on_request_error(&self, error: TransportError) -> TransportResult<ApiRequest> {
        Err(error)
    }
}

/// Hook invoked after a response (or a failure) is received.
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, response: ApiResponse) -> TransportResult<ApiResponse> {
        Ok(response)
    }

    fn on_response_error(&self, error: TransportError) -> TransportResult<ApiResponse> {
        Err(error)
    }
}

/// Default interceptor: passes everything through and logs failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

impl RequestInterceptor for LoggingInterceptor {
    fn on_request_error(&self, error: TransportError) -> TransportResult<ApiRequest> {
        tracing::error!(error = %error, "Request error");
        Err(error)
    }
}

impl ResponseInterceptor for LoggingInterceptor {
    fn on_response_error(&self, error: TransportError) -> TransportResult<ApiResponse> {
        tracing::error!(error = %error, "Response error");
        Err(error)
    }
}
