//! Upstream call types and error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The connection could not be established or the response could not be
    /// read (includes timeouts).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a status other than 200 OK.
    #[error("upstream returned status {status}")]
    Status { status: u16 },

    /// Upstream body could not be decoded into the expected records.
    #[error("failed to decode upstream body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A target URL could not be built from the configured base.
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// One upstream response: status code plus raw body bytes.
///
/// Read once and discarded; nothing is retained across requests.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    /// Treat only `200 OK` as success.
    ///
    /// Any other status, 2xx included, logs the upstream body and converts to
    /// [`UpstreamError::Status`]. Callers that relay responses verbatim skip
    /// this and use the response as-is.
    pub fn into_success(self) -> UpstreamResult<UpstreamResponse> {
        if self.status == StatusCode::OK {
            return Ok(self);
        }
        tracing::warn!(
            status = self.status.as_u16(),
            body = %String::from_utf8_lossy(&self.body),
            "upstream returned non-success status"
        );
        Err(UpstreamError::Status {
            status: self.status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_passes_through() {
        let response = UpstreamResponse {
            status: StatusCode::OK,
            body: b"hello".to_vec(),
        };
        let response = response.into_success().unwrap();
        assert_eq!(response.body, b"hello");
    }

    #[test]
    fn test_non_200_becomes_status_error() {
        let response = UpstreamResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: b"{\"field\":\"email\"}".to_vec(),
        };
        let err = response.into_success().unwrap_err();
        assert!(matches!(err, UpstreamError::Status { status: 422 }));
    }

    #[test]
    fn test_other_2xx_is_not_success() {
        let response = UpstreamResponse {
            status: StatusCode::CREATED,
            body: Vec::new(),
        };
        assert!(response.into_success().is_err());
    }

    #[test]
    fn test_error_display() {
        let err = UpstreamError::Status { status: 502 };
        assert_eq!(err.to_string(), "upstream returned status 502");
    }
}
