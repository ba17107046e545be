//! Pipeline domain types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one pipeline run on the CI platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineId(pub u64);

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PipelineId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Summary returned by the "latest pipeline" endpoint
///
/// Only the identifier is used; the platform sends many more fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSummary {
    pub id: Option<PipelineId>,
    #[serde(default)]
    pub status: Option<String>,
}
