//! Resolves who is making a request from the `x-user-id` header.
//!
//! This asserts an identity, it does not authenticate one.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The user named by the request's `x-user-id` header.
pub struct ActingUser(pub User);

impl ActingUser {
    pub fn require_admin(self) -> Result<User, AppError> {
        if self.0.is_admin() {
            Ok(self.0)
        } else {
            Err(AppError::Forbidden(
                "This action requires an admin account".to_string(),
            ))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or(AppError::Unauthorized)?;

        let user = state
            .store
            .lookup_user(user_id)
            .await
            .map_err(|_| AppError::Unauthorized)?;
        Ok(ActingUser(user))
    }
}
