/// Error types for the CLOB HTTP layer.
///
/// Request-level failures (connectivity, timeouts, protocol errors) are kept
/// apart from configuration and usage errors so that best-effort callers such
/// as connection warming can recover from exactly the former.
use thiserror::Error;

/// The primary error type for this crate.
#[derive(Error, Debug)]
pub enum ClobError {
    // Transport errors
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    // Client-side errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // Generic
    #[error("{0}")]
    Other(String),
}

impl ClobError {
    /// Returns true for failures raised while performing a request, as
    /// opposed to errors in how the request or client was set up.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            ClobError::Request(_) | ClobError::Timeout(_) | ClobError::Status { .. }
        )
    }

    /// Returns the HTTP status code if the server answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClobError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error suggests retrying with backoff.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClobError::Request(_) | ClobError::Timeout(_) => true,
            ClobError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClobError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ClobError::InvalidUrl(err.to_string())
        } else if err.is_timeout() {
            ClobError::Timeout(err.to_string())
        } else {
            ClobError::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClobError {
    fn from(err: url::ParseError) -> Self {
        ClobError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ClobError;

    #[test]
    fn classifies_request_errors() {
        assert!(ClobError::Request("refused".into()).is_request_error());
        assert!(ClobError::Timeout("10s".into()).is_request_error());
        assert!(ClobError::Status {
            status: 405,
            body: String::new()
        }
        .is_request_error());
        assert!(!ClobError::InvalidUrl("nope".into()).is_request_error());
        assert!(!ClobError::ClientBuild("tls".into()).is_request_error());
    }

    #[test]
    fn retryable_statuses() {
        let throttled = ClobError::Status {
            status: 429,
            body: "slow down".into(),
        };
        let bad_request = ClobError::Status {
            status: 400,
            body: "bad".into(),
        };
        assert!(throttled.is_retryable());
        assert!(!bad_request.is_retryable());
        assert_eq!(bad_request.status(), Some(400));
    }

    #[test]
    fn url_parse_error_maps_to_invalid_url() {
        let err: ClobError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ClobError::InvalidUrl(_)));
    }
}
