//! Job-related API endpoints

use tracehook_core::domain::job::{Job, JobId};
use tracehook_core::domain::pipeline::PipelineId;

use crate::GitLabClient;
use crate::error::Result;

impl GitLabClient {
    /// List all jobs for a specific pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The pipeline id
    ///
    /// # Returns
    /// The jobs in upstream order
    pub async fn list_pipeline_jobs(&self, pipeline_id: PipelineId) -> Result<Vec<Job>> {
        let url = format!("{}/pipelines/{}/jobs", self.project_url(), pipeline_id);
        tracing::debug!("Fetching jobs for pipeline {}", pipeline_id);

        let response = self.get(&url).send().await?;
        let jobs: Vec<Job> = self.handle_response(response).await?;

        tracing::info!("Fetched {} jobs for pipeline {}", jobs.len(), pipeline_id);
        Ok(jobs)
    }

    /// Get the raw trace of a job
    ///
    /// The trace is plain text and is never parsed.
    ///
    /// # Arguments
    /// * `job_id` - The job id
    pub async fn get_job_trace(&self, job_id: JobId) -> Result<String> {
        let url = format!("{}/jobs/{}/trace", self.project_url(), job_id);
        tracing::debug!("Fetching trace for job {}", job_id);

        let response = self.get(&url).send().await?;
        let trace = self.handle_text_response(response).await?;

        tracing::info!("Trace fetched for job {} ({} bytes)", job_id, trace.len());
        Ok(trace)
    }
}
