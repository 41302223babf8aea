use std::sync::Arc;

use anyhow::anyhow;
use bytes::Bytes;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::applications::tracker::{
    self, ApplicantRow, ApplicantSummary, ApplicationOutcome, ApplyRequest, StatusUpdateOutcome,
    StatusUpdateRequest,
};
use crate::catalog::fixtures::{fixture_admin, fixture_jobs, fixture_resumes, fixture_skills};
use crate::catalog::latency::{Operation, SimulatedLatency};
use crate::catalog::validation::validate_new_job;
use crate::errors::AppError;
use crate::matching::filter::{query_jobs, JobQuery};
use crate::matching::scoring::{MatchReport, MatchScorer};
use crate::matching::skill_extraction::{extract_resume_text, extract_skills};
use crate::models::application::JobApplication;
use crate::models::job::{JobRequirement, NewJobRequirement, SalaryRange};
use crate::models::resume::Resume;
use crate::models::skill::Skill;
use crate::models::user::{Profile, User, UserRole};
use crate::profile::editor::{ensure_owner, normalize_profile};

/// The collections behind the store. Ids are unique within each collection.
#[derive(Debug, Default)]
pub struct Catalog {
    pub jobs: Vec<JobRequirement>,
    pub resumes: Vec<Resume>,
    pub skills: Vec<Skill>,
    pub users: Vec<User>,
    pub applications: Vec<JobApplication>,
}

impl Catalog {
    /// Admin account and the skill list only.
    pub fn bare() -> Self {
        Catalog {
            skills: fixture_skills(),
            users: vec![fixture_admin()],
            ..Default::default()
        }
    }

    /// `bare()` plus the demo jobs and resumes.
    pub fn seeded() -> Self {
        Catalog {
            jobs: fixture_jobs(),
            resumes: fixture_resumes(),
            ..Catalog::bare()
        }
    }

    pub fn find_job(&self, id: Uuid) -> Result<&JobRequirement, AppError> {
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }

    pub fn find_resume(&self, id: Uuid) -> Result<&Resume, AppError> {
        self.resumes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
    }

    pub fn find_user(&self, id: Uuid) -> Result<&User, AppError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
    }
}

/// A resume file as received from the upload form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub data: Bytes,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Shared handle to the catalog. Cheap to clone; every clone sees the same data.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Catalog>>,
    latency: SimulatedLatency,
}

impl CatalogStore {
    pub fn new(catalog: Catalog, latency: SimulatedLatency) -> Self {
        CatalogStore {
            inner: Arc::new(RwLock::new(catalog)),
            latency,
        }
    }

    // ── Jobs ────────────────────────────────────────────────────────────────

    pub async fn fetch_job_requirements(&self) -> Vec<JobRequirement> {
        self.latency.wait(Operation::Read).await;
        self.inner.read().await.jobs.clone()
    }

    pub async fn get_job_requirement(&self, id: Uuid) -> Result<JobRequirement, AppError> {
        self.latency.wait(Operation::Read).await;
        self.inner.read().await.find_job(id).cloned()
    }

    /// Runs the filter engine (and search term) over the current postings.
    pub async fn query_job_requirements(&self, query: &JobQuery) -> Vec<JobRequirement> {
        self.latency.wait(Operation::Read).await;
        let catalog = self.inner.read().await;
        query_jobs(&catalog.jobs, query)
    }

    /// Validates, then stores a new posting with a fresh id and creation time.
    pub async fn create_job_requirement(
        &self,
        new_job: NewJobRequirement,
    ) -> Result<JobRequirement, AppError> {
        validate_new_job(&new_job)?;
        self.latency.wait(Operation::CreateJob).await;

        let job = new_job.into_job(Uuid::new_v4(), Utc::now());
        self.inner.write().await.jobs.push(job.clone());

        info!(
            job_id = %job.id,
            title = %job.title,
            salary = %job.salary.as_ref().map(SalaryRange::display).unwrap_or_default(),
            "Created job requirement"
        );
        Ok(job)
    }

    /// Full replacement; `id` and `created_at` are preserved.
    pub async fn replace_job_requirement(
        &self,
        id: Uuid,
        new_job: NewJobRequirement,
    ) -> Result<JobRequirement, AppError> {
        validate_new_job(&new_job)?;
        self.latency.wait(Operation::CreateJob).await;

        let mut catalog = self.inner.write().await;
        let slot = catalog
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
        *slot = new_job.into_job(id, slot.created_at);

        info!(job_id = %id, "Replaced job requirement");
        Ok(slot.clone())
    }

    // ── Resumes ─────────────────────────────────────────────────────────────

    pub async fn fetch_resumes(&self) -> Vec<Resume> {
        self.latency.wait(Operation::Read).await;
        self.inner.read().await.resumes.clone()
    }

    pub async fn get_resume(&self, id: Uuid) -> Result<Resume, AppError> {
        self.latency.wait(Operation::Read).await;
        self.inner.read().await.find_resume(id).cloned()
    }

    pub async fn fetch_user_resumes(&self, user_id: Uuid) -> Vec<Resume> {
        self.latency.wait(Operation::Read).await;
        self.inner
            .read()
            .await
            .resumes
            .iter()
            .filter(|r| r.owner_id == Some(user_id))
            .cloned()
            .collect()
    }

    /// Reads the uploaded file, extracts the catalog skills it mentions and
    /// stores the resume under `owner`. Candidate name and email default to
    /// the owner's.
    pub async fn upload_resume(&self, owner: &User, upload: ResumeUpload) -> Result<Resume, AppError> {
        let filename = upload.filename.trim().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("A resume file is required".to_string()));
        }
        self.latency.wait(Operation::Upload).await;

        let text = {
            let filename = filename.clone();
            let data = upload.data.clone();
            tokio::task::spawn_blocking(move || extract_resume_text(&filename, &data))
                .await
                .map_err(|e| AppError::Internal(anyhow!("resume extraction task failed: {e}")))??
        };

        let mut catalog = self.inner.write().await;
        let skills = extract_skills(&text, &catalog.skills);
        debug!(filename = %filename, skills = skills.len(), "Extracted skills from resume");

        let resume = Resume {
            id: Uuid::new_v4(),
            name: non_blank(upload.name).unwrap_or_else(|| owner.name.clone()),
            email: non_blank(upload.email).unwrap_or_else(|| owner.email.clone()),
            filename,
            upload_date: Utc::now(),
            skills,
            score: None,
            owner_id: Some(owner.id),
        };
        catalog.resumes.push(resume.clone());

        info!(resume_id = %resume.id, owner_id = %owner.id, "Stored uploaded resume");
        Ok(resume)
    }

    pub async fn set_resume_score(&self, resume_id: Uuid, score: u32) -> Result<Resume, AppError> {
        let mut catalog = self.inner.write().await;
        let resume = catalog
            .resumes
            .iter_mut()
            .find(|r| r.id == resume_id)
            .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
        resume.score = Some(score.min(100));
        Ok(resume.clone())
    }

    /// Scores the resume against the job and stores the score on the resume.
    /// Users may analyze their own or unowned resumes; admins any resume.
    pub async fn analyze_resume_with_job(
        &self,
        actor: &User,
        resume_id: Uuid,
        job_id: Uuid,
        scorer: &dyn MatchScorer,
    ) -> Result<MatchReport, AppError> {
        self.latency.wait(Operation::Analyze).await;

        let (resume, job) = {
            let catalog = self.inner.read().await;
            (
                catalog.find_resume(resume_id)?.clone(),
                catalog.find_job(job_id)?.clone(),
            )
        };
        if !actor.is_admin() && !resume.usable_by(actor.id) {
            return Err(AppError::Forbidden(
                "You can only analyze your own resumes".to_string(),
            ));
        }

        let report = scorer.score(&resume, &job).await?;
        self.set_resume_score(resume_id, report.score).await?;

        info!(
            resume_id = %resume_id,
            job_id = %job_id,
            score = report.score,
            "Analyzed resume against job"
        );
        Ok(report)
    }

    // ── Skills ──────────────────────────────────────────────────────────────

    pub async fn fetch_skills(&self) -> Vec<Skill> {
        self.inner.read().await.skills.clone()
    }

    /// Distinct categories in first-seen order.
    pub async fn skill_categories(&self) -> Vec<String> {
        let catalog = self.inner.read().await;
        let mut categories: Vec<String> = Vec::new();
        for skill in &catalog.skills {
            if !categories.contains(&skill.category) {
                categories.push(skill.category.clone());
            }
        }
        categories
    }

    pub async fn skills_by_category(&self, category: &str) -> Vec<Skill> {
        self.inner
            .read()
            .await
            .skills
            .iter()
            .filter(|s| s.category.eq_ignore_ascii_case(category.trim()))
            .cloned()
            .collect()
    }

    // ── Users ───────────────────────────────────────────────────────────────

    /// Returns the account for `email`, creating a `user`-role account on first sight.
    pub async fn sign_in(&self, email: &str, name: Option<&str>) -> Result<User, AppError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        self.latency.wait(Operation::Read).await;

        let mut catalog = self.inner.write().await;
        if let Some(user) = catalog.find_user_by_email(email) {
            return Ok(user.clone());
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or("Regular User")
                .to_string(),
            role: UserRole::User,
            profile: Profile::default(),
        };
        catalog.users.push(user.clone());

        info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.latency.wait(Operation::Read).await;
        self.lookup_user(id).await
    }

    /// Immediate lookup used to resolve the acting user of a request.
    pub async fn lookup_user(&self, id: Uuid) -> Result<User, AppError> {
        self.inner.read().await.find_user(id).cloned()
    }

    pub async fn update_profile(
        &self,
        actor: &User,
        user_id: Uuid,
        profile: Profile,
    ) -> Result<User, AppError> {
        ensure_owner(actor, user_id)?;
        self.latency.wait(Operation::ProfileUpdate).await;

        let mut catalog = self.inner.write().await;
        let user = catalog
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
        user.profile = normalize_profile(profile);

        info!(user_id = %user_id, "Updated profile");
        Ok(user.clone())
    }

    // ── Applications ────────────────────────────────────────────────────────

    pub async fn apply_for_job(
        &self,
        job_id: Uuid,
        user_id: Uuid,
        request: ApplyRequest,
    ) -> Result<ApplicationOutcome, AppError> {
        self.latency.wait(Operation::Apply).await;

        let application = {
            let mut catalog = self.inner.write().await;
            tracker::apply(&mut catalog, job_id, user_id, request, Utc::now())?
        };

        info!(
            application_id = %application.id,
            job_id = %job_id,
            user_id = %user_id,
            "Application submitted"
        );
        Ok(ApplicationOutcome {
            success: true,
            message: "Application submitted successfully!".to_string(),
            application_id: Some(application.id),
        })
    }

    pub async fn update_application_status(
        &self,
        application_id: Uuid,
        request: StatusUpdateRequest,
    ) -> Result<StatusUpdateOutcome, AppError> {
        self.latency.wait(Operation::StatusUpdate).await;

        let application = {
            let mut catalog = self.inner.write().await;
            tracker::update_status(&mut catalog, application_id, request)?
        };

        info!(
            application_id = %application_id,
            status = %application.status,
            "Application status updated"
        );
        Ok(StatusUpdateOutcome {
            success: true,
            message: format!("Applicant status changed to {}", application.status),
            status: application.status,
        })
    }

    pub async fn fetch_user_applications(&self, user_id: Uuid) -> Vec<JobApplication> {
        self.latency.wait(Operation::Read).await;
        self.inner
            .read()
            .await
            .applications
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Applications for one job with their candidate details, plus status counts.
    pub async fn fetch_job_applications(
        &self,
        job_id: Uuid,
    ) -> Result<(Vec<ApplicantRow>, ApplicantSummary), AppError> {
        self.latency.wait(Operation::Read).await;
        let catalog = self.inner.read().await;
        catalog.find_job(job_id)?;

        let applications: Vec<JobApplication> = catalog
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect();
        let summary = tracker::summarize(&applications);
        Ok((tracker::applicant_rows(&catalog, &applications), summary))
    }

    /// Every application across all jobs, for the admin console.
    pub async fn fetch_all_applications(&self) -> (Vec<ApplicantRow>, ApplicantSummary) {
        self.latency.wait(Operation::Read).await;
        let catalog = self.inner.read().await;
        (
            tracker::applicant_rows(&catalog, &catalog.applications),
            tracker::summarize(&catalog.applications),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
