use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skill::Skill;

/// A candidate record. `score` is written by the match scorer on analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub skills: Vec<Skill>,
    pub score: Option<u32>,
    /// Uploading user, when the resume came in through the API.
    pub owner_id: Option<Uuid>,
}

impl Resume {
    /// Demo resumes have no owner and may be used by anyone; uploaded ones
    /// belong to their uploader.
    pub fn usable_by(&self, user_id: Uuid) -> bool {
        self.owner_id.map_or(true, |owner| owner == user_id)
    }
}
