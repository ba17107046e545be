//! Tracehook GitLab Client
//!
//! A small, type-safe HTTP client for the read-only GitLab API calls the
//! webhook receiver needs: latest pipeline, pipeline jobs and job trace.
//!
//! # Example
//!
//! ```no_run
//! use tracehook_client::GitLabClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tracehook_client::ClientError> {
//!     let client = GitLabClient::new("https://gitlab.com/api/v4", "69686811", "glpat-token");
//!
//!     let pipeline_id = client.get_latest_pipeline_id().await?;
//!     let jobs = client.list_pipeline_jobs(pipeline_id).await?;
//!
//!     println!("Pipeline {} has {} jobs", pipeline_id, jobs.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
pub mod lookup;
mod pipelines;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use lookup::CiLookup;

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracehook_core::domain::job::{Job, JobId};
use tracehook_core::domain::pipeline::PipelineId;

/// HTTP client for the GitLab REST API, scoped to one project
///
/// Every request carries the access token as a bearer credential.
#[derive(Clone)]
pub struct GitLabClient {
    /// Base URL of the API (e.g., "https://gitlab.com/api/v4")
    base_url: String,
    /// Project id or URL-encoded `namespace/project` path
    project_id: String,
    /// Access token sent as `Authorization: Bearer`
    token: String,
    /// HTTP client instance
    client: Client,
}

impl GitLabClient {
    /// Create a new GitLab client
    ///
    /// # Arguments
    /// * `base_url` - The API base URL (e.g., "https://gitlab.com/api/v4")
    /// * `project_id` - Numeric project id or `namespace/project` path
    /// * `token` - Access token with `read_api` scope
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::with_client(base_url, project_id, token, Client::new())
    }

    /// Create a new GitLab client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use reqwest::Client;
    /// use std::time::Duration;
    /// use tracehook_client::GitLabClient;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GitLabClient::with_client("https://gitlab.com/api/v4", "42", "token", http_client);
    /// assert_eq!(client.project_url(), "https://gitlab.com/api/v4/projects/42");
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url: String = base_url.into();
        let project_id: String = project_id.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.replace('/', "%2F"),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the configured project, all endpoints hang off it
    pub fn project_url(&self) -> String {
        format!("{}/projects/{}", self.base_url, self.project_id)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url).bearer_auth(&self.token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is plain text
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let response = Self::check_status(response).await?;
        Ok(response.text().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}

impl fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabClient")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl CiLookup for GitLabClient {
    async fn latest_pipeline_id(&self) -> Result<PipelineId> {
        self.get_latest_pipeline_id().await
    }

    async fn pipeline_jobs(&self, pipeline_id: PipelineId) -> Result<Vec<Job>> {
        self.list_pipeline_jobs(pipeline_id).await
    }

    async fn job_trace(&self, job_id: JobId) -> Result<String> {
        self.get_job_trace(job_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GitLabClient::new("https://gitlab.com/api/v4", "69686811", "secret");
        assert_eq!(client.base_url(), "https://gitlab.com/api/v4");
        assert_eq!(
            client.project_url(),
            "https://gitlab.com/api/v4/projects/69686811"
        );
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GitLabClient::new("https://gitlab.example.com/api/v4/", "1", "secret");
        assert_eq!(client.base_url(), "https://gitlab.example.com/api/v4");
    }

    #[test]
    fn test_project_path_is_encoded() {
        let client = GitLabClient::new("https://gitlab.com/api/v4", "group/sub/app", "secret");
        assert_eq!(
            client.project_url(),
            "https://gitlab.com/api/v4/projects/group%2Fsub%2Fapp"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = GitLabClient::new("https://gitlab.com/api/v4", "1", "glpat-very-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("glpat-very-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
