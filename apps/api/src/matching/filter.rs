//! Filter Engine — narrows a job collection by the criteria a candidate picks.
//!
//! Every active dimension must match (logical AND). An absent criterion, or an
//! empty set of allowed values, places no constraint on that dimension.

use serde::{Deserialize, Serialize};

use crate::models::job::{EmploymentType, ExperienceLevel, JobRequirement, LocationType};

/// Requested pay band. A job's own band must fit inside it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SalaryBounds {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct JobFilters {
    pub salary: Option<SalaryBounds>,
    pub employment_type: Option<Vec<EmploymentType>>,
    pub location_type: Option<Vec<LocationType>>,
    pub experience_level: Option<Vec<ExperienceLevel>>,
}

/// Filters plus the free-text search box, as the dashboard combines them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct JobQuery {
    #[serde(flatten)]
    pub filters: JobFilters,
    pub search: Option<String>,
}

impl JobFilters {
    pub fn is_empty(&self) -> bool {
        self.salary.is_none()
            && active(&self.employment_type).is_none()
            && active(&self.location_type).is_none()
            && active(&self.experience_level).is_none()
    }

    /// True when `job` satisfies every active criterion.
    pub fn matches(&self, job: &JobRequirement) -> bool {
        if let Some(bounds) = &self.salary {
            match &job.salary {
                Some(salary) if salary.min >= bounds.min && salary.max <= bounds.max => {}
                _ => return false,
            }
        }

        member_of(&self.employment_type, job.employment_type.as_ref())
            && member_of(&self.location_type, job.location_type.as_ref())
            && member_of(&self.experience_level, job.experience_level.as_ref())
    }
}

fn active<T>(allowed: &Option<Vec<T>>) -> Option<&[T]> {
    allowed.as_deref().filter(|values| !values.is_empty())
}

/// Inactive dimension → true. Active dimension → the job must carry a listed value.
fn member_of<T: PartialEq>(allowed: &Option<Vec<T>>, value: Option<&T>) -> bool {
    match active(allowed) {
        None => true,
        Some(values) => value.map(|v| values.contains(v)).unwrap_or(false),
    }
}

/// Returns the jobs matching all active filters, in their original order.
pub fn filter_jobs(jobs: &[JobRequirement], filters: &JobFilters) -> Vec<JobRequirement> {
    if filters.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter().filter(|job| filters.matches(job)).cloned().collect()
}

/// Case-insensitive substring search over title, description and required skill names.
/// A blank term returns every job.
pub fn search_jobs(jobs: &[JobRequirement], term: &str) -> Vec<JobRequirement> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter()
        .filter(|job| matches_term(job, &term))
        .cloned()
        .collect()
}

fn matches_term(job: &JobRequirement, term_lower: &str) -> bool {
    job.title.to_lowercase().contains(term_lower)
        || job.description.to_lowercase().contains(term_lower)
        || job
            .required_skills
            .iter()
            .any(|s| s.name.to_lowercase().contains(term_lower))
}

/// Applies the filters, then the search term.
pub fn query_jobs(jobs: &[JobRequirement], query: &JobQuery) -> Vec<JobRequirement> {
    let filtered = filter_jobs(jobs, &query.filters);
    match query.search.as_deref() {
        Some(term) => search_jobs(&filtered, term),
        None => filtered,
    }
}
