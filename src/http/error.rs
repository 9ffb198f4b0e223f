//! Request error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Everything that can go wrong handling one forwarded request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The inbound form body could not be parsed.
    #[error("failed to parse form body: {0}")]
    FormParse(String),

    /// A required identifier was absent from the request.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The outbound payload could not be encoded.
    #[error("failed to encode payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The outbound call failed, either in transport or by upstream status.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl GatewayError {
    /// HTTP status written to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::FormParse(_) | GatewayError::MissingParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Upstream(UpstreamError::Status { .. }) => StatusCode::BAD_GATEWAY,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Upstream details stay in the logs; callers get a stable message.
        let body = match &self {
            GatewayError::Upstream(UpstreamError::Status { status }) => {
                format!("upstream returned status {}", status)
            }
            GatewayError::Upstream(_) => "upstream request failed".to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            GatewayError::FormParse("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::MissingParameter("id").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_status_maps_to_502() {
        let err = GatewayError::Upstream(UpstreamError::Status { status: 422 });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_url_failure_maps_to_500() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = GatewayError::Upstream(UpstreamError::Url(parse_err));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
