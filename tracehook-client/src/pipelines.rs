//! Pipeline-related API endpoints

use tracehook_core::domain::pipeline::{PipelineId, PipelineSummary};

use crate::GitLabClient;
use crate::error::{ClientError, Result};

impl GitLabClient {
    /// Get the id of the latest pipeline of the project
    ///
    /// # Returns
    /// The pipeline id, or `MissingField` when the payload carries none
    pub async fn get_latest_pipeline_id(&self) -> Result<PipelineId> {
        let url = format!("{}/pipelines/latest", self.project_url());
        tracing::debug!("Fetching latest pipeline");

        let response = self.get(&url).send().await?;
        let summary: PipelineSummary = self.handle_response(response).await?;

        let id = summary.id.ok_or(ClientError::MissingField("id"))?;
        tracing::info!(
            "Latest pipeline fetched: {} ({})",
            id,
            summary.status.as_deref().unwrap_or("unknown")
        );

        Ok(id)
    }
}
