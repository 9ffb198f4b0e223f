//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic parsing. All errors are
//! collected and reported together rather than failing on the first one.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Listener bind address does not parse as a socket address.
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    /// Upstream base URL is missing or not http(s).
    #[error("upstream.base_url '{0}' is not a valid http(s) URL")]
    BaseUrl(String),

    /// Upstream credential is empty.
    #[error("upstream.auth_token must not be empty (set it in the config file or via PORTAL_API_TOKEN)")]
    AuthToken,

    /// A timeout is configured as zero.
    #[error("timeouts.{0} must be greater than zero")]
    Timeout(&'static str),

    /// Metrics address does not parse as a socket address.
    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, returning every violation found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::BaseUrl(config.upstream.base_url.clone())),
    }

    if config.upstream.auth_token.is_empty() {
        errors.push(ValidationError::AuthToken);
    }

    for (name, value) in [
        ("connect_secs", config.timeouts.connect_secs),
        ("request_secs", config.timeouts.request_secs),
        ("upstream_secs", config.timeouts.upstream_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::Timeout(name));
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
