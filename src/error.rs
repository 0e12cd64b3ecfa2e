//! Error types for the Pushy SDK.

use thiserror::Error;

use crate::types::ApiError;

/// Result type alias using PushyError.
pub type Result<T> = std::result::Result<T, PushyError>;

/// Boxed error reported by [`Transport`](crate::Transport) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when using the Pushy SDK.
#[derive(Error, Debug)]
pub enum PushyError {
    /// Client configuration error (empty API token, missing transport).
    #[error("configuration error: {0}")]
    Config(String),

    /// The service rejected the request (HTTP status >= 400).
    ///
    /// Carries the decoded error body alongside the status summary.
    #[error("API error ({status} {reason}): {}", .error.error)]
    Api {
        status: u16,
        reason: String,
        error: ApiError,
    },

    /// The HTTP exchange could not be completed (connection, DNS, TLS,
    /// malformed URL).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Endpoint URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl PushyError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API error for a rejected status code.
    pub fn api(status: u16, error: ApiError) -> Self {
        Self::Api {
            status,
            reason: status_reason(status),
            error,
        }
    }

    /// Create a transport error from any underlying cause.
    pub fn transport(cause: impl Into<BoxError>) -> Self {
        Self::Transport(cause.into())
    }
}

/// Canonical reason phrase for a status code, or empty when unknown.
pub(crate) fn status_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = PushyError::api(
            404,
            ApiError {
                error: "no such device".to_string(),
            },
        );
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Not Found"));
        assert!(rendered.contains("no such device"));
    }

    #[test]
    fn transport_error_display_includes_cause() {
        let err = PushyError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        assert!(err.to_string().contains("connection reset by peer"));
    }
}
