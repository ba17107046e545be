//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracehook_client::ClientError;
use tracehook_core::dto::webhook::{
    FORBIDDEN_MESSAGE, INVALID_PAYLOAD_MESSAGE, MessageResponse, UPSTREAM_FAILURE_MESSAGE,
};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    Forbidden,
    BadRequest(String),
    Upstream(ClientError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                MessageResponse::new(FORBIDDEN_MESSAGE),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                MessageResponse::with_error(INVALID_PAYLOAD_MESSAGE, msg),
            ),
            // Upstream text is forwarded as-is to the caller.
            ApiError::Upstream(err) => {
                tracing::error!("Upstream error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::with_error(UPSTREAM_FAILURE_MESSAGE, err.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        ApiError::Upstream(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
