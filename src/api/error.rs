//! API Errors
//!
//! Error taxonomy for calls against the PetCare API. Every variant collapses
//! to the same user-facing message in the dashboard; the precise cause only
//! goes to the console.

use thiserror::Error;

/// Errors that can occur when talking to the PetCare API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, CORS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the client-side timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the JSON we expected
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The single message shown to the user, regardless of cause.
    pub fn user_message(&self) -> String {
        "Falha ao carregar os dados".to_string()
    }
}

/// Error body the DRF backend attaches to non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message contained in the body, if any.
    pub fn message(&self) -> Option<String> {
        self.error.clone().or_else(|| self.detail.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_is_uniform_across_variants() {
        let variants = [
            ApiError::Network("connection refused".into()),
            ApiError::Timeout,
            ApiError::Http {
                status: 500,
                message: "Failed to retrieve metrics".into(),
            },
            ApiError::Decode("expected value at line 1".into()),
        ];

        for err in variants {
            assert_eq!(err.user_message(), "Falha ao carregar os dados");
        }
    }

    #[test]
    fn error_body_prefers_error_over_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Service not found.", "detail": "ignored"}"#)
                .unwrap();
        assert_eq!(body.message().as_deref(), Some("Service not found."));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Authentication credentials were not provided."}"#)
                .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("Authentication credentials were not provided.")
        );

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message().is_none());
    }
}
