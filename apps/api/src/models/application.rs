use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of an application. Any status may be set from any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    /// Still waiting on a decision from the hiring side.
    pub fn is_pending_review(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Applied | ApplicationStatus::Reviewed
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub applied_date: DateTime<Utc>,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub feedback: Option<String>,
    pub interview_date: Option<NaiveDate>,
}
