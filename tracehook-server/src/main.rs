//! Tracehook
//!
//! Receives GitLab pipeline webhooks and answers failed pipelines with the
//! step script section of the failed job's trace.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracehook_client::GitLabClient;
use tracehook_server::{api, config::Config, service::webhook::Orchestrator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tracehook_server=debug,tracehook_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tracehook...");

    // Load configuration
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;
    tracing::info!(
        "Loaded configuration: project_id={}, api_url={}, request_timeout={:?}",
        config.project_id,
        config.api_url,
        config.request_timeout()
    );

    let client = GitLabClient::with_client(
        &config.api_url,
        &config.project_id,
        &config.gitlab_token,
        config.http_client().context("Failed to build HTTP client")?,
    );
    let orchestrator = Arc::new(Orchestrator::from_config(Arc::new(client), &config));

    // Build router with all API endpoints
    let app = api::create_router(orchestrator);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
