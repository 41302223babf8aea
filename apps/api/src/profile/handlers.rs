//! Axum route handlers for sign-in and the profile editor.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::actor::ActingUser;
use crate::errors::AppError;
use crate::models::user::{Profile, User};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub name: Option<String>,
}

/// POST /api/v1/users/sign-in
///
/// Returns the account for the email, creating a regular user on first sign-in.
/// The returned `id` goes in the `x-user-id` header of later requests.
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<User>, AppError> {
    let user = state
        .store
        .sign_in(&request.email, request.name.as_deref())
        .await?;
    Ok(Json(user))
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.store.get_user(id).await?))
}

/// PUT /api/v1/users/:id/profile (owner only)
pub async fn handle_update_profile(
    State(state): State<AppState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<Uuid>,
    Json(profile): Json<Profile>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.store.update_profile(&actor, id, profile).await?))
}
