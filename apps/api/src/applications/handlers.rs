//! Axum route handlers for applying to jobs and tracking application status.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::actor::ActingUser;
use crate::applications::tracker::{
    ApplicantRow, ApplicantSummary, ApplicationOutcome, ApplyRequest, StatusUpdateOutcome,
    StatusUpdateRequest,
};
use crate::errors::AppError;
use crate::models::application::JobApplication;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobApplicationsResponse {
    pub job_id: Uuid,
    pub applications: Vec<ApplicantRow>,
    pub summary: ApplicantSummary,
}

#[derive(Debug, Serialize)]
pub struct ApplicantListResponse {
    pub applications: Vec<ApplicantRow>,
    pub summary: ApplicantSummary,
}

/// POST /api/v1/jobs/:id/apply
///
/// Applies as the acting user. Fails with 400 when no resume is selected.
pub async fn handle_apply(
    State(state): State<AppState>,
    ActingUser(user): ActingUser,
    Path(job_id): Path<Uuid>,
    Json(request): Json<ApplyRequest>,
) -> Result<Json<ApplicationOutcome>, AppError> {
    let outcome = state.store.apply_for_job(job_id, user.id, request).await?;
    Ok(Json(outcome))
}

/// PATCH /api/v1/applications/:id/status (admin)
pub async fn handle_update_status(
    State(state): State<AppState>,
    actor: ActingUser,
    Path(application_id): Path<Uuid>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateOutcome>, AppError> {
    actor.require_admin()?;
    let outcome = state
        .store
        .update_application_status(application_id, request)
        .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/applications/mine
pub async fn handle_my_applications(
    State(state): State<AppState>,
    ActingUser(user): ActingUser,
) -> Json<Vec<JobApplication>> {
    Json(state.store.fetch_user_applications(user.id).await)
}

/// GET /api/v1/jobs/:id/applications (admin)
pub async fn handle_job_applications(
    State(state): State<AppState>,
    actor: ActingUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobApplicationsResponse>, AppError> {
    actor.require_admin()?;
    let (applications, summary) = state.store.fetch_job_applications(job_id).await?;
    Ok(Json(JobApplicationsResponse {
        job_id,
        applications,
        summary,
    }))
}

/// GET /api/v1/applications (admin)
///
/// Every application with its job title and candidate resume details.
pub async fn handle_all_applications(
    State(state): State<AppState>,
    actor: ActingUser,
) -> Result<Json<ApplicantListResponse>, AppError> {
    actor.require_admin()?;
    let (applications, summary) = state.store.fetch_all_applications().await;
    Ok(Json(ApplicantListResponse {
        applications,
        summary,
    }))
}
