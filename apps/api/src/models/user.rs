use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skill::Skill;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    Unemployed,
    Student,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation_year: u16,
    #[serde(default)]
    pub field_of_study: String,
    pub proof_id: Option<String>,
}

/// Fields edited through the profile editor. Owned by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Profile {
    pub profile_photo: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub other_profiles: BTreeMap<String, String>,
    pub address: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub extra_activities: Vec<String>,
    pub employment_status: Option<EmploymentStatus>,
    pub current_employer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub profile: Profile,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
