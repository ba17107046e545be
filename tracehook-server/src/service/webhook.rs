//! Webhook Service
//!
//! Decides what to do with an inbound webhook and, for failed pipelines,
//! runs the lookup sequence: pipeline id, then jobs, then the failed job's trace.

use std::sync::Arc;

use tracehook_client::{CiLookup, ClientError};
use tracehook_core::domain::event::{PIPELINE_KIND, PipelineEvent};
use tracehook_core::domain::job::first_failed;
use tracehook_core::domain::pipeline::PipelineId;
use tracehook_core::domain::report::ErrorReport;
use tracehook_core::dto::webhook::PipelineReport;

use crate::config::Config;

/// Which pipeline to inspect for a failed job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineSelection {
    /// The pipeline named by the event
    Event(PipelineId),
    /// Whatever pipeline is latest when the lookup runs
    Latest,
}

/// What the receiver should do with a request, before any remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Shared secret missing or wrong
    Reject,
    /// Body is not a decodable event
    Invalid(String),
    /// Not a pipeline event
    Ignore,
    /// Pipeline did not fail, answer without lookups
    Acknowledge(PipelineReport),
    /// Pipeline failed, look for the failed job
    Investigate(PipelineSelection),
}

/// Final result of handling a webhook
#[derive(Debug)]
pub enum Outcome {
    Rejected,
    Invalid(String),
    Ignored,
    Completed(PipelineReport),
    Failed(ClientError),
}

/// Classify a request from its token header and raw body
///
/// The token is compared before the body is looked at, so a rejected
/// request never has its payload decoded.
pub fn decide(secret: &str, presented_token: Option<&[u8]>, body: &[u8]) -> Decision {
    if presented_token != Some(secret.as_bytes()) {
        return Decision::Reject;
    }

    let payload: serde_json::Value = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(err) => return Decision::Invalid(err.to_string()),
    };

    // Only pipeline events are decoded further; other kinds keep their own schema.
    if payload.get("object_kind").and_then(serde_json::Value::as_str) != Some(PIPELINE_KIND) {
        return Decision::Ignore;
    }

    let event: PipelineEvent = match serde_json::from_value(payload) {
        Ok(event) => event,
        Err(err) => return Decision::Invalid(err.to_string()),
    };

    if !event.reports_failure() {
        return Decision::Acknowledge(PipelineReport::passed(event.status()));
    }

    let selection = match event.pipeline_id() {
        Some(id) => PipelineSelection::Event(id),
        None => PipelineSelection::Latest,
    };
    Decision::Investigate(selection)
}

/// Orchestrates the handling of pipeline webhooks
pub struct Orchestrator {
    lookup: Arc<dyn CiLookup>,
    secret: String,
}

impl Orchestrator {
    pub fn new(lookup: Arc<dyn CiLookup>, secret: impl Into<String>) -> Self {
        Self {
            lookup,
            secret: secret.into(),
        }
    }

    pub fn from_config(lookup: Arc<dyn CiLookup>, config: &Config) -> Self {
        Self::new(lookup, config.webhook_secret.clone())
    }

    /// Handle one webhook request
    pub async fn handle(&self, presented_token: Option<&[u8]>, body: &[u8]) -> Outcome {
        match decide(&self.secret, presented_token, body) {
            Decision::Reject => {
                tracing::warn!("Webhook rejected: invalid token");
                Outcome::Rejected
            }
            Decision::Invalid(msg) => {
                tracing::warn!("Webhook payload could not be decoded: {}", msg);
                Outcome::Invalid(msg)
            }
            Decision::Ignore => {
                tracing::debug!("Ignoring non-pipeline event");
                Outcome::Ignored
            }
            Decision::Acknowledge(report) => {
                tracing::info!("Pipeline status: {}", report.pipeline_status);
                Outcome::Completed(report)
            }
            Decision::Investigate(selection) => {
                tracing::info!("Pipeline status: failed");
                match self.investigate(selection).await {
                    Ok(report) => Outcome::Completed(report),
                    Err(err) => {
                        tracing::error!("Error fetching pipeline data: {}", err);
                        Outcome::Failed(err)
                    }
                }
            }
        }
    }

    /// Find the failed job of a pipeline and extract its error section
    async fn investigate(&self, selection: PipelineSelection) -> Result<PipelineReport, ClientError> {
        let pipeline_id = match selection {
            PipelineSelection::Event(id) => id,
            PipelineSelection::Latest => {
                tracing::warn!(
                    "Event carries no pipeline id, falling back to the latest pipeline (may be newer than the event)"
                );
                self.lookup.latest_pipeline_id().await?
            }
        };

        let jobs = self.lookup.pipeline_jobs(pipeline_id).await?;

        let Some(job) = first_failed(&jobs) else {
            tracing::info!("No failed job in pipeline {}", pipeline_id);
            return Ok(PipelineReport::failed(None));
        };

        tracing::info!("Job {} ({}) failed, fetching trace", job.id, job.name);
        let trace = self.lookup.job_trace(job.id).await?;

        Ok(PipelineReport::failed(Some(ErrorReport::from_trace(
            job, &trace,
        ))))
    }
}
