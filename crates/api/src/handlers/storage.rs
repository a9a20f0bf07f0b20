//! Signed-URL issuing and object serving for the private image store.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vestra_core::error::CoreError;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::storage::SignedUrl;

#[derive(Debug, Deserialize)]
pub struct SignRequest {
    pub path: String,
    /// Lifetime in seconds; the configured default applies when omitted.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ObjectQuery {
    pub exp: i64,
    pub sig: String,
}

/// `POST /api/v1/storage/sign`
///
/// Only the owner may sign: the key's first segment must be the caller's id.
pub async fn sign_url(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SignRequest>,
) -> AppResult<Json<SignedUrl>> {
    let owner_prefix = format!("{}/", user.id);
    if !req.path.starts_with(&owner_prefix) {
        return Err(CoreError::Forbidden("Cannot sign another user's objects".to_string()).into());
    }

    let signed = match req.expires_in {
        Some(secs) => state.store.sign_with_expiry(&req.path, secs)?,
        None => state.store.sign(&req.path)?,
    };
    Ok(Json(signed))
}

/// `GET /api/v1/storage/object/{*path}?exp=...&sig=...`
///
/// No session required: the signature alone grants time-limited access.
pub async fn serve_object(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<ObjectQuery>,
) -> AppResult<impl IntoResponse> {
    state.store.verify(&path, query.exp, &query.sig)?;
    let bytes = state.store.get(&path).await?;

    let content_type = match path.rsplit('.').next() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    };

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "private, max-age=60"),
        ],
        bytes,
    ))
}
