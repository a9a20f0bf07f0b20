//! Bearer-token authentication extractor.
//!
//! Handlers that require an authenticated user take [`AuthUser`] as an
//! argument; extraction fails with 401 when the `Authorization` header is
//! missing, malformed, or carries an invalid/expired token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vestra_core::error::CoreError;
use vestra_core::types::DbId;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user for the current request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: DbId,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                CoreError::Unauthorized("Missing Authorization header".to_string())
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            CoreError::Unauthorized("Authorization header must use the Bearer scheme".to_string())
        })?;

        let claims = jwt::validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Access token validation failed");
            CoreError::Unauthorized("Invalid or expired token".to_string())
        })?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}
