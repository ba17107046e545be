//! Inbound webhook event types

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::PipelineId;

/// `object_kind` carried by pipeline status events
pub const PIPELINE_KIND: &str = "pipeline";

/// Pipeline status reported for a failed run
pub const FAILED_STATUS: &str = "failed";

/// Notification posted by the CI platform
///
/// Only the fields the receiver acts on are decoded. Other event kinds
/// (merge requests, pushes, ...) decode into the same shape with no attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineEvent {
    pub object_kind: String,
    #[serde(default)]
    pub object_attributes: Option<PipelineAttributes>,
}

/// Attributes of the pipeline that emitted the event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineAttributes {
    #[serde(default)]
    pub id: Option<PipelineId>,
    #[serde(default)]
    pub status: String,
}

impl PipelineEvent {
    /// Build a pipeline event with the given status
    pub fn pipeline(status: impl Into<String>) -> Self {
        Self {
            object_kind: PIPELINE_KIND.to_string(),
            object_attributes: Some(PipelineAttributes {
                id: None,
                status: status.into(),
            }),
        }
    }

    pub fn is_pipeline(&self) -> bool {
        self.object_kind == PIPELINE_KIND
    }

    /// Status self-reported by the event, empty when absent
    pub fn status(&self) -> &str {
        self.object_attributes
            .as_ref()
            .map(|attrs| attrs.status.as_str())
            .unwrap_or_default()
    }

    pub fn reports_failure(&self) -> bool {
        self.status() == FAILED_STATUS
    }

    /// Pipeline the event describes, when the platform included it
    pub fn pipeline_id(&self) -> Option<PipelineId> {
        self.object_attributes.as_ref().and_then(|attrs| attrs.id)
    }
}
