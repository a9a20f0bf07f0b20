//! Saved-outfit handlers: persist accepted suggestions, list, schedule on
//! the calendar, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use vestra_core::error::CoreError;
use vestra_core::suggestion::MAX_OCCASION_CHARS;
use vestra_core::types::DbId;
use vestra_db::models::outfit::{CreateOutfit, Outfit};
use vestra_db::repositories::OutfitRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateOutfitRequest {
    pub name: String,
    pub occasion: String,
    pub item_ids: Vec<DbId>,
    #[serde(default)]
    pub is_generated: bool,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// `null` clears the schedule.
    pub scheduled_date: Option<NaiveDate>,
}

/// `POST /api/v1/outfits`
pub async fn create_outfit(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateOutfitRequest>,
) -> AppResult<(StatusCode, Json<Outfit>)> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Outfit name is required".to_string()).into());
    }
    if req.occasion.trim().chars().count() > MAX_OCCASION_CHARS {
        return Err(CoreError::Validation(
            "Valid occasion is required (max 50 characters)".to_string(),
        )
        .into());
    }
    if req.item_ids.is_empty() {
        return Err(CoreError::Validation("An outfit needs at least one item".to_string()).into());
    }

    let outfit = OutfitRepo::create(
        &state.pool,
        &CreateOutfit {
            user_id: user.id,
            name: name.to_string(),
            occasion: req.occasion.trim().to_string(),
            item_ids: req.item_ids,
            is_generated: req.is_generated,
            scheduled_date: req.scheduled_date,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(outfit)))
}

/// `GET /api/v1/outfits`
pub async fn list_outfits(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Outfit>>> {
    let outfits = OutfitRepo::list_by_user(&state.pool, user.id).await?;
    Ok(Json(outfits))
}

/// `GET /api/v1/outfits/scheduled`
///
/// Calendar view: scheduled outfits only, ascending by date.
pub async fn list_scheduled(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Outfit>>> {
    let outfits = OutfitRepo::list_scheduled_by_user(&state.pool, user.id).await?;
    Ok(Json(outfits))
}

/// `PUT /api/v1/outfits/{id}/schedule`
pub async fn schedule_outfit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(req): Json<ScheduleRequest>,
) -> AppResult<Json<Outfit>> {
    let Some(outfit) =
        OutfitRepo::set_schedule(&state.pool, user.id, id, req.scheduled_date).await?
    else {
        return Err(CoreError::NotFound {
            entity: "Outfit",
            id,
        }
        .into());
    };
    Ok(Json(outfit))
}

/// `DELETE /api/v1/outfits/{id}`
pub async fn delete_outfit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = OutfitRepo::delete_for_user(&state.pool, user.id, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Outfit",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse {
        message: "Outfit deleted",
    }))
}
