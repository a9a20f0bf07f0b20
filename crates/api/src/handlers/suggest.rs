//! The outfit-suggestion endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use vestra_core::suggestion::{ItemSummary, SuggestionOutcome};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub items: Vec<ItemSummary>,
    #[serde(default)]
    pub occasion: String,
}

/// `POST /api/v1/outfits/suggest`
///
/// Returns the model's suggestion verbatim when it parses as JSON, or the
/// deterministic fallback body otherwise. Validation failures are 400;
/// missing gateway credentials and upstream failures are 500. The extractor
/// rejection is mapped by hand so malformed bodies also get the standard
/// `{error, code}` envelope rather than axum's plain-text 422.
pub async fn suggest(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> AppResult<Json<SuggestionOutcome>> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let outcome = state.stylist.generate(&req.items, &req.occasion).await?;
    if outcome.is_fallback() {
        tracing::info!("Returning fallback suggestion");
    }
    Ok(Json(outcome))
}
