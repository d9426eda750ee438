//! Backend API client.
//!
//! # Responsibilities
//! - Bind request paths to the configured base URL
//! - Run request interceptors, send, run response interceptors
//! - Turn non-2xx responses into `TransportError::Status`
//!
//! # Design Decisions
//! - No retry, backoff or credential injection
//! - 2xx responses are returned exactly as received
//! - Every failure passes through the response error hooks, which log it

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::HttpConfig;
use crate::http::error::{TransportError, TransportResult};
use crate::http::interceptor::{LoggingInterceptor, RequestInterceptor, ResponseInterceptor};
use crate::http::request::ApiRequest;
use crate::http::response::ApiResponse;
use crate::http::transport::{ReqwestTransport, Transport};
use crate::observability::metrics;

/// Client for the farm backend API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Create a client over the given transport, with logging interceptors installed.
    pub fn new(base_url: Url, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            transport,
            request_interceptors: vec![Arc::new(LoggingInterceptor)],
            response_interceptors: vec![Arc::new(LoggingInterceptor)],
        }
    }

    /// Create a `reqwest`-backed client from configuration.
    pub fn from_config(config: &HttpConfig) -> TransportResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TransportError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let transport = ReqwestTransport::new(config)?;

        tracing::debug!(
            base_url = %base_url,
            timeout_ms = config.timeout_ms,
            "API client created"
        );
        Ok(Self::new(base_url, Arc::new(transport)))
    }

    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn with_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a request through the interceptor chain.
    pub async fn request(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        let method = request.method.to_string();

        let received = match self.intercept_request(request) {
            Ok(request) => self.dispatch(request).await,
            Err(e) => Err(e),
        };

        let status = received.as_ref().map(|r| r.status.as_u16()).unwrap_or(0);
        metrics::record_http_request(&method, status);

        let checked = received.and_then(|response| {
            if response.is_success() {
                Ok(response)
            } else {
                Err(TransportError::Status {
                    status: response.status,
                    body: response.text(),
                })
            }
        });

        self.intercept_response(checked)
    }

    pub async fn get(&self, path: &str) -> TransportResult<ApiResponse> {
        self.request(ApiRequest::get(path)).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        self.get(path).await?.json()
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> TransportResult<ApiResponse> {
        self.request(ApiRequest::post(path, body)?).await
    }

    async fn dispatch(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        let url = self.bind(&request)?;
        tracing::debug!(method = %request.method, url = %url, "Sending request");
        self.transport.send(url, request).await
    }

    fn intercept_request(&self, request: ApiRequest) -> TransportResult<ApiRequest> {
        self.request_interceptors
            .iter()
            .fold(Ok(request), |acc, interceptor| match acc {
                Ok(request) => interceptor.on_request(request),
                Err(e) => interceptor.on_request_error(e),
            })
    }

    fn intercept_response(
        &self,
        received: TransportResult<ApiResponse>,
    ) -> TransportResult<ApiResponse> {
        self.response_interceptors
            .iter()
            .fold(received, |acc, interceptor| match acc {
                Ok(response) => interceptor.on_response(response),
                Err(e) => interceptor.on_response_error(e),
            })
    }

    /// Resolve the request path against the base URL and append the query.
    pub fn bind(&self, request: &ApiRequest) -> TransportResult<Url> {
        let invalid = |reason: String| TransportError::InvalidUrl {
            url: request.path.clone(),
            reason,
        };

        let path = request.path.as_str();
        let parsed = if path.starts_with("//") {
            self.base_url.join(path)
        } else if is_absolute_url(path) {
            Url::parse(path)
        } else {
            let joined = format!(
                "{}/{}",
                self.base_url.as_str().trim_end_matches('/'),
                path.trim_start_matches('/')
            );
            Url::parse(&joined)
        };
        let mut url = parsed.map_err(|e| invalid(e.to_string()))?;

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

/// `scheme://...` with an RFC 3986 scheme. A bare `name:rest` stays relative.
fn is_absolute_url(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish()
    }
}
