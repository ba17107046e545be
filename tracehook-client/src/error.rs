//! Error types for the GitLab client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while looking up pipeline data on the CI platform
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Response decoded but lacks a required field
    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_classification() {
        let not_found = ClientError::api_error(404, "404 Project Not Found");
        assert!(not_found.is_not_found());

        let bad_gateway = ClientError::api_error(502, "Bad Gateway");
        assert!(!bad_gateway.is_not_found());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::api_error(401, "401 Unauthorized").to_string(),
            "API error (status 401): 401 Unauthorized"
        );
        assert_eq!(
            ClientError::MissingField("id").to_string(),
            "Response is missing field `id`"
        );
    }
}
