//! Axum route handlers for job search and resume/job analysis.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::actor::ActingUser;
use crate::errors::AppError;
use crate::matching::filter::JobQuery;
use crate::matching::scoring::MatchReport;
use crate::models::job::JobRequirement;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<JobRequirement>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub score: u32,
    pub report: MatchReport,
}

/// POST /api/v1/jobs/search
///
/// Body is a `JobQuery`: the salary band and allowed-value sets of the filter
/// panel plus an optional search term. An empty body object returns every job.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(query): Json<JobQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    if let Some(bounds) = &query.filters.salary {
        if bounds.min > bounds.max {
            return Err(AppError::Validation(format!(
                "salary.min ({}) must not exceed salary.max ({})",
                bounds.min, bounds.max
            )));
        }
    }

    let jobs = state.store.query_job_requirements(&query).await;
    Ok(Json(SearchResponse {
        total: jobs.len(),
        jobs,
    }))
}

/// POST /api/v1/resumes/:id/analyze/:job_id
///
/// Scores the resume against the job and stores the score on the resume.
/// 403 when the resume was uploaded by another user (admins exempt).
pub async fn handle_analyze(
    State(state): State<AppState>,
    ActingUser(user): ActingUser,
    Path((resume_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = state
        .store
        .analyze_resume_with_job(&user, resume_id, job_id, state.match_scorer.as_ref())
        .await?;

    Ok(Json(AnalyzeResponse {
        resume_id,
        job_id,
        score: report.score,
        report,
    }))
}
