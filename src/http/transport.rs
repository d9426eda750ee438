//! Wire transport behind the API client.
//!
//! # Responsibilities
//! - Send a bound request and buffer the response
//! - Map client failures to `TransportError`
//!
//! # Design Decisions
//! - A trait seam so the client can run against an in-memory transport
//! - Status codes are not interpreted here; the client decides what is an error

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::config::HttpConfig;
use crate::http::error::{TransportError, TransportResult};
use crate::http::request::ApiRequest;
use crate::http::response::ApiResponse;

/// Sends requests that have already been bound to an absolute URL.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: Url, request: ApiRequest) -> TransportResult<ApiResponse>;
}

/// Transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Build a client with the configured timeout and default content type.
    pub fn new(config: &HttpConfig) -> TransportResult<Self> {
        let mut headers = HeaderMap::new();
        let content_type = HeaderValue::from_str(&config.content_type)
            .map_err(|e| TransportError::Build(format!("invalid content type: {}", e)))?;
        headers.insert(CONTENT_TYPE, content_type);

        let mut builder = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    fn map_error(&self, error: reqwest::Error, timeout: Duration) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(timeout.as_millis() as u64)
        } else if error.is_builder() {
            TransportError::InvalidUrl {
                url: error.url().map(|u| u.to_string()).unwrap_or_default(),
                reason: error.to_string(),
            }
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: Url, request: ApiRequest) -> TransportResult<ApiResponse> {
        let timeout = request.timeout.unwrap_or(self.timeout);

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers)
            .timeout(timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_error(e, timeout))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_error(e, timeout))?;

        Ok(ApiResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
