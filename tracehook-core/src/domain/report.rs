//! Error report derived from a failed job

use serde::{Deserialize, Serialize};

use crate::domain::job::{Job, JobId};
use crate::trace;

/// The failed job and the relevant part of its trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub id: JobId,
    pub name: String,
    /// Sanitized step script section, or the whole sanitized trace
    #[serde(rename = "trace")]
    pub excerpt: String,
}

impl ErrorReport {
    /// Build a report for `job` from its raw trace
    pub fn from_trace(job: &Job, raw_trace: &str) -> Self {
        Self {
            id: job.id,
            name: job.name.clone(),
            excerpt: trace::excerpt(raw_trace),
        }
    }
}
