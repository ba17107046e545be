//! Webhook response DTOs

use serde::{Deserialize, Serialize};

use crate::domain::event::FAILED_STATUS;
use crate::domain::report::ErrorReport;

pub const IGNORED_MESSAGE: &str = "Not a pipeline event, ignored";
pub const FORBIDDEN_MESSAGE: &str = "Forbidden";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error fetching pipeline data";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid webhook payload";

/// Result of processing a pipeline event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub pipeline_status: String,
    pub failed_job: Option<ErrorReport>,
}

impl PipelineReport {
    /// Report for a pipeline whose event did not signal failure
    pub fn passed(status: impl Into<String>) -> Self {
        Self {
            pipeline_status: status.into(),
            failed_job: None,
        }
    }

    /// Report for a failed pipeline, with the failed job when one was found
    pub fn failed(failed_job: Option<ErrorReport>) -> Self {
        Self {
            pipeline_status: FAILED_STATUS.to_string(),
            failed_job,
        }
    }
}

/// Plain acknowledgment / error message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }

    pub fn ignored() -> Self {
        Self::new(IGNORED_MESSAGE)
    }
}
