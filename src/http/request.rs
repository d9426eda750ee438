//! Outgoing API requests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use crate::http::error::{TransportError, TransportResult};

/// A request before it is bound to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, or an absolute URL.
    pub path: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Overrides the client timeout for this request.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post<T: Serialize>(path: impl Into<String>, body: &T) -> TransportResult<Self> {
        Self::new(Method::POST, path).with_json(body)
    }

    pub fn put<T: Serialize>(path: impl Into<String>, body: &T) -> TransportResult<Self> {
        Self::new(Method::PUT, path).with_json(body)
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> TransportResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
