//! Lookup seam between the webhook orchestrator and the CI platform

use async_trait::async_trait;
use tracehook_core::domain::job::{Job, JobId};
use tracehook_core::domain::pipeline::PipelineId;

use crate::error::Result;

/// Read-only pipeline lookups the webhook receiver depends on
///
/// Each call is a single request: no retries, pagination or caching.
#[async_trait]
pub trait CiLookup: Send + Sync {
    /// Resolve the most recently created pipeline of the configured project
    async fn latest_pipeline_id(&self) -> Result<PipelineId>;

    /// List the jobs of a pipeline in the order the platform returns them
    async fn pipeline_jobs(&self, pipeline_id: PipelineId) -> Result<Vec<Job>>;

    /// Fetch the raw console trace of a job
    async fn job_trace(&self, job_id: JobId) -> Result<String>;
}
