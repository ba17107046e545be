//! API Module
//!
//! HTTP API layer for the webhook receiver.

pub mod error;
pub mod health;
pub mod webhook;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::service::webhook::Orchestrator;

/// Path GitLab is configured to deliver webhooks to
pub const WEBHOOK_PATH: &str = "/api/gitlab-webhook";

/// Create the main API router with all endpoints
pub fn create_router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Webhook endpoints
        .route(
            WEBHOOK_PATH,
            post(webhook::receive_webhook).fallback(webhook::method_not_allowed),
        )
        .route(
            "/",
            post(webhook::receive_webhook).fallback(webhook::method_not_allowed),
        )
        // Add state and middleware
        .with_state(orchestrator)
        .layer(TraceLayer::new_for_http())
}
