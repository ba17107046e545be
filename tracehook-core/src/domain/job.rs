//! Job domain types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one job on the CI platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One unit of CI execution belonging to a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default)]
    pub name: String,
    pub status: JobStatus,
}

impl Job {
    pub fn is_failed(&self) -> bool {
        self.status == JobStatus::Failed
    }
}

/// Job execution status as reported by the platform
///
/// Statuses this receiver does not know about decode as `Unknown`
/// and are treated like every other non-failed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Created,
    Pending,
    Running,
    Success,
    Failed,
    Canceled,
    Skipped,
    Manual,
    Scheduled,
    WaitingForResource,
    Preparing,
    #[serde(other)]
    Unknown,
}

/// Returns the first failed job in upstream order
pub fn first_failed(jobs: &[Job]) -> Option<&Job> {
    jobs.iter().find(|job| job.is_failed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_decodes_platform_payload() {
        let json = r#"{"id": 7, "name": "build", "status": "failed", "stage": "test", "ref": "main"}"#;
        let job: Job = serde_json::from_str(json).unwrap();

        assert_eq!(job.id, JobId(7));
        assert_eq!(job.name, "build");
        assert!(job.is_failed());
    }

    #[test]
    fn test_unrecognized_status_is_not_failed() {
        let json = r#"{"id": 1, "name": "lint", "status": "bridge_blocked"}"#;
        let job: Job = serde_json::from_str(json).unwrap();

        assert_eq!(job.status, JobStatus::Unknown);
        assert!(!job.is_failed());
    }

    #[test]
    fn test_first_failed_keeps_upstream_order() {
        let jobs = vec![
            Job {
                id: JobId(1),
                name: "lint".to_string(),
                status: JobStatus::Success,
            },
            Job {
                id: JobId(2),
                name: "build".to_string(),
                status: JobStatus::Failed,
            },
            Job {
                id: JobId(3),
                name: "test".to_string(),
                status: JobStatus::Failed,
            },
        ];

        assert_eq!(first_failed(&jobs).map(|job| job.id), Some(JobId(2)));
        assert!(first_failed(&jobs[..1]).is_none());
    }
}
