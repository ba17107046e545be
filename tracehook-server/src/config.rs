//! Server configuration
//!
//! Every setting can be passed as a flag or through the environment.
//! The configuration is read once at startup and never mutated.

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_API_URL: &str = "https://gitlab.com/api/v4";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Server configuration
#[derive(Clone, Parser)]
#[command(name = "tracehook")]
#[command(about = "GitLab pipeline webhook receiver that reports failed job traces", long_about = None)]
pub struct Config {
    /// Access token used as bearer credential against the GitLab API
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub gitlab_token: String,

    /// Project id or `namespace/project` path
    #[arg(long, env = "GITLAB_PROJECT_ID")]
    pub project_id: String,

    /// GitLab API base URL
    #[arg(long, env = "GITLAB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Secret token GitLab sends in the `X-Gitlab-Token` header
    #[arg(long, env = "GITLAB_WEBHOOK_SECRET", hide_env_values = true)]
    pub webhook_secret: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "TRACEHOOK_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: String,

    /// Timeout for GitLab API requests in seconds (transport default when unset)
    #[arg(long, env = "GITLAB_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.gitlab_token.is_empty() {
            anyhow::bail!("gitlab_token cannot be empty");
        }

        if self.project_id.is_empty() {
            anyhow::bail!("project_id cannot be empty");
        }

        if self.webhook_secret.is_empty() {
            anyhow::bail!("webhook_secret cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.request_timeout == Some(0) {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }

    /// Build the HTTP client used for GitLab requests
    pub fn http_client(&self) -> anyhow::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
