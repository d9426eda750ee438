//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0)
//! - Check the base URL is an absolute http(s) address
//! - Check the routing base is an absolute path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShellConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::ShellConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("http.base_url '{value}' is not a valid URL: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("http.base_url scheme '{0}' is not http or https")]
    UnsupportedScheme(String),

    #[error("http.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("http.content_type must not be empty")]
    EmptyContentType,

    #[error("routing.base '{0}' must be an absolute path without query or fragment")]
    InvalidRoutingBase(String),

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.http.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            value: config.http.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.http.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.http.content_type.trim().is_empty() {
        errors.push(ValidationError::EmptyContentType);
    }

    let base = &config.routing.base;
    if !base.starts_with('/') || base.contains(['?', '#']) {
        errors.push(ValidationError::InvalidRoutingBase(base.clone()));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
