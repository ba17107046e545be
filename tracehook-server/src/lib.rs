//! Tracehook Server
//!
//! Webhook receiver for GitLab pipeline events. When a pipeline reports
//! failure it looks up the failed job, fetches its trace and answers the
//! webhook with the step script section of that trace.
//!
//! Architecture:
//! - Configuration: process settings parsed once at startup
//! - Service: the webhook orchestrator (decision + sequential lookups)
//! - API: axum routes mapping orchestrator outcomes to HTTP responses

pub mod api;
pub mod config;
pub mod service;
