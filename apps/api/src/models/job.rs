use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skill::Skill;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
    Volunteer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LocationType {
    Remote,
    OnSite,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Expert,
}

/// Advertised pay band. `currency` is free text ("USD", "USD/hr").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    pub currency: String,
}

impl SalaryRange {
    /// Human-readable band, e.g. `$80,000-$110,000` or `$100-$150/hr`.
    pub fn display(&self) -> String {
        if self.currency == "USD/hr" {
            format!("${}-${}/hr", self.min, self.max)
        } else {
            format!(
                "${}-${}",
                group_thousands(self.min),
                group_thousands(self.max)
            )
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// A posted position. Replaced wholesale on update; `id` and `created_at` never change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRequirement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<Skill>,
    pub salary: Option<SalaryRange>,
    pub employment_type: Option<EmploymentType>,
    pub location_type: Option<LocationType>,
    pub experience_level: Option<ExperienceLevel>,
    pub location: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields of a job posting. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewJobRequirement {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<Skill>,
    pub salary: Option<SalaryRange>,
    pub employment_type: Option<EmploymentType>,
    pub location_type: Option<LocationType>,
    pub experience_level: Option<ExperienceLevel>,
    pub location: Option<String>,
    pub deadline: Option<NaiveDate>,
}

impl NewJobRequirement {
    pub fn into_job(self, id: Uuid, created_at: DateTime<Utc>) -> JobRequirement {
        JobRequirement {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            required_skills: self.required_skills,
            salary: self.salary,
            employment_type: self.employment_type,
            location_type: self.location_type,
            experience_level: self.experience_level,
            location: self
                .location
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            deadline: self.deadline,
            created_at,
        }
    }
}
