//! Webhook API Handlers
//!
//! The body is taken as raw bytes so the secret can be checked before
//! anything is decoded.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracehook_core::dto::webhook::MessageResponse;

use crate::api::error::{ApiError, ApiResult};
use crate::service::webhook::{Orchestrator, Outcome};

/// Header carrying the webhook secret token
pub const GITLAB_TOKEN_HEADER: &str = "x-gitlab-token";

/// POST /api/gitlab-webhook
/// Receive a GitLab event and report the failed job of a failed pipeline
pub async fn receive_webhook(
    State(orchestrator): State<Arc<Orchestrator>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    tracing::info!("Webhook received ({} bytes)", body.len());

    let token = headers
        .get(GITLAB_TOKEN_HEADER)
        .map(|value| value.as_bytes());

    match orchestrator.handle(token, &body).await {
        Outcome::Rejected => Err(ApiError::Forbidden),
        Outcome::Invalid(msg) => Err(ApiError::BadRequest(msg)),
        Outcome::Ignored => Ok(Json(MessageResponse::ignored()).into_response()),
        Outcome::Completed(report) => Ok(Json(report).into_response()),
        Outcome::Failed(err) => Err(err.into()),
    }
}

/// Any non-POST request on a webhook path
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
