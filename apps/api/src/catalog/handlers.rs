//! Axum route handlers for job postings, resumes and the skill list.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actor::ActingUser;
use crate::catalog::store::ResumeUpload;
use crate::errors::AppError;
use crate::models::job::{JobRequirement, NewJobRequirement};
use crate::models::resume::Resume;
use crate::models::skill::Skill;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRequirement>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<Resume>,
}

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    let jobs = state.store.fetch_job_requirements().await;
    Json(JobListResponse {
        total: jobs.len(),
        jobs,
    })
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRequirement>, AppError> {
    Ok(Json(state.store.get_job_requirement(id).await?))
}

/// POST /api/v1/jobs (admin)
pub async fn handle_create_job(
    State(state): State<AppState>,
    actor: ActingUser,
    Json(request): Json<NewJobRequirement>,
) -> Result<(StatusCode, Json<JobRequirement>), AppError> {
    actor.require_admin()?;
    let job = state.store.create_job_requirement(request).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/v1/jobs/:id (admin)
pub async fn handle_replace_job(
    State(state): State<AppState>,
    actor: ActingUser,
    Path(id): Path<Uuid>,
    Json(request): Json<NewJobRequirement>,
) -> Result<Json<JobRequirement>, AppError> {
    actor.require_admin()?;
    Ok(Json(state.store.replace_job_requirement(id, request).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Resumes
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes (admin)
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    actor: ActingUser,
) -> Result<Json<ResumeListResponse>, AppError> {
    actor.require_admin()?;
    let resumes = state.store.fetch_resumes().await;
    Ok(Json(ResumeListResponse { resumes }))
}

/// GET /api/v1/resumes/mine
pub async fn handle_my_resumes(
    State(state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Json<ResumeListResponse> {
    let resumes = state.store.fetch_user_resumes(user.id).await;
    Json(ResumeListResponse { resumes })
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.store.get_resume(id).await?))
}

/// POST /api/v1/resumes
///
/// Multipart form: `resume` (file, required), `name` and `email` (optional text).
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    ActingUser(user): ActingUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;
    let mut name = None;
    let mut email = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume file: {e}")))?;
                file = Some((filename, data));
            }
            Some("name") => name = Some(read_text(field).await?),
            Some("email") => email = Some(read_text(field).await?),
            _ => {}
        }
    }

    let (filename, data) = file
        .ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;

    let resume = state
        .store
        .upload_resume(
            &user,
            ResumeUpload {
                filename,
                data,
                name,
                email,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(resume)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form field: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillQuery>,
) -> Json<Vec<Skill>> {
    let skills = match params.category.as_deref() {
        Some(category) => state.store.skills_by_category(category).await,
        None => state.store.fetch_skills().await,
    };
    Json(skills)
}

/// GET /api/v1/skills/categories
pub async fn handle_skill_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.skill_categories().await)
}
