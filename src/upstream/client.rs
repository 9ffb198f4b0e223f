//! HTTP client for the upstream REST API.
//!
//! # Responsibilities
//! - Issue one outbound request per call, no retries
//! - Attach the two fixed headers (JSON content type, bearer credential)
//! - Enforce connect and round-trip timeouts
//! - Return status and body bytes without reinterpreting them

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use url::Url;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::http::request::X_REQUEST_ID;
use crate::resource::{ResourceKind, UserRecord};
use crate::upstream::types::{UpstreamResponse, UpstreamResult};

/// Client for the upstream API, built once at startup and shared.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    /// Base URL, normalized to end with a slash so joins append segments.
    base_url: Url,
    auth_token: String,
}

impl UpstreamClient {
    /// Create a new client from configuration.
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.upstream_secs))
            .build()?;

        let mut normalized = upstream.base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = Url::parse(&normalized)?;

        Ok(Self {
            http,
            base_url,
            auth_token: upstream.auth_token.clone(),
        })
    }

    /// URL of a kind's collection, e.g. `{base}/users`.
    pub fn collection_url(&self, kind: ResourceKind) -> UpstreamResult<Url> {
        Ok(self.base_url.join(kind.collection_path())?)
    }

    /// URL of one item in a kind's collection, e.g. `{base}/users/{id}`.
    pub fn item_url(&self, kind: ResourceKind, id: &str) -> UpstreamResult<Url> {
        Ok(self
            .base_url
            .join(&format!("{}/{}", kind.collection_path(), id))?)
    }

    /// Perform one outbound call and return the raw result.
    ///
    /// Transport failures are errors; any received response, whatever its
    /// status, is an `Ok` value. Status interpretation belongs to the caller.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        request_id: Option<&str>,
    ) -> UpstreamResult<UpstreamResponse> {
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.auth_token);
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            "upstream call completed"
        );

        Ok(UpstreamResponse { status, body })
    }

    /// Fetch and decode the full user listing.
    pub async fn list_users(&self) -> UpstreamResult<Vec<UserRecord>> {
        let url = self.collection_url(ResourceKind::User)?;
        let response = self.send(Method::GET, url, None, None).await?.into_success()?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}

// The bearer credential stays out of Debug output.
impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
