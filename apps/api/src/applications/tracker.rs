//! Application Tracker — creates applications and moves them between statuses.
//!
//! Transitions are unconstrained: any status may be set from any other, and
//! the last write wins. Foreign keys are checked when an application is created.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::skill::Skill;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApplyRequest {
    pub resume_id: Option<Uuid>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationOutcome {
    pub success: bool,
    pub message: String,
    pub application_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
    pub feedback: Option<String>,
    pub interview_date: Option<NaiveDate>,
}

impl StatusUpdateRequest {
    pub fn to(status: ApplicationStatus) -> Self {
        StatusUpdateRequest {
            status,
            feedback: None,
            interview_date: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdateOutcome {
    pub success: bool,
    pub message: String,
    pub status: ApplicationStatus,
}

/// Per-job applicant counts for the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApplicantSummary {
    pub total: usize,
    pub applied: usize,
    pub reviewed: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub hired: usize,
    /// applied + reviewed
    pub pending_review: usize,
}

/// Resume details shown beside an application in the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateSummary {
    pub name: String,
    pub email: String,
    pub skills: Vec<Skill>,
    pub score: Option<u32>,
}

/// An application joined with its job title and candidate resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicantRow {
    #[serde(flatten)]
    pub application: JobApplication,
    pub job_title: Option<String>,
    pub candidate: Option<CandidateSummary>,
}

/// Records a new application in state `applied`.
///
/// Fails before touching the catalog when no resume is selected, with
/// `NotFound` when the job, user or resume does not exist, and with
/// `Forbidden` when the resume was uploaded by someone else.
pub fn apply(
    catalog: &mut Catalog,
    job_id: Uuid,
    user_id: Uuid,
    request: ApplyRequest,
    now: DateTime<Utc>,
) -> Result<JobApplication, AppError> {
    let resume_id = request.resume_id.ok_or_else(|| {
        AppError::Validation("Please select a resume to continue".to_string())
    })?;

    catalog.find_job(job_id)?;
    catalog.find_user(user_id)?;
    if !catalog.find_resume(resume_id)?.usable_by(user_id) {
        return Err(AppError::Forbidden(
            "You can only apply with your own resume".to_string(),
        ));
    }

    let application = JobApplication {
        id: Uuid::new_v4(),
        job_id,
        user_id,
        resume_id,
        applied_date: now,
        status: ApplicationStatus::Applied,
        cover_letter: request
            .cover_letter
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        feedback: None,
        interview_date: None,
    };
    catalog.applications.push(application.clone());
    Ok(application)
}

/// Overwrites the status (and feedback / interview date when given).
pub fn update_status(
    catalog: &mut Catalog,
    application_id: Uuid,
    request: StatusUpdateRequest,
) -> Result<JobApplication, AppError> {
    let application = catalog
        .applications
        .iter_mut()
        .find(|a| a.id == application_id)
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;

    application.status = request.status;
    if let Some(feedback) = request.feedback.map(|f| f.trim().to_string()) {
        application.feedback = Some(feedback).filter(|f| !f.is_empty());
    }
    if request.interview_date.is_some() {
        application.interview_date = request.interview_date;
    }
    Ok(application.clone())
}

/// Joins each application with its job and resume, oldest application first.
pub fn applicant_rows(catalog: &Catalog, applications: &[JobApplication]) -> Vec<ApplicantRow> {
    let mut rows: Vec<ApplicantRow> = applications
        .iter()
        .map(|application| ApplicantRow {
            job_title: catalog
                .find_job(application.job_id)
                .ok()
                .map(|job| job.title.clone()),
            candidate: catalog
                .find_resume(application.resume_id)
                .ok()
                .map(|resume| CandidateSummary {
                    name: resume.name.clone(),
                    email: resume.email.clone(),
                    skills: resume.skills.clone(),
                    score: resume.score,
                }),
            application: application.clone(),
        })
        .collect();
    rows.sort_by_key(|row| row.application.applied_date);
    rows
}

pub fn summarize(applications: &[JobApplication]) -> ApplicantSummary {
    let mut summary = ApplicantSummary {
        total: applications.len(),
        ..Default::default()
    };
    for application in applications {
        match application.status {
            ApplicationStatus::Applied => summary.applied += 1,
            ApplicationStatus::Reviewed => summary.reviewed += 1,
            ApplicationStatus::Shortlisted => summary.shortlisted += 1,
            ApplicationStatus::Rejected => summary.rejected += 1,
            ApplicationStatus::Hired => summary.hired += 1,
        }
        if application.status.is_pending_review() {
            summary.pending_review += 1;
        }
    }
    summary
}
