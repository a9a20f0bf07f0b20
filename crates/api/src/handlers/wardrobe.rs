//! Wardrobe item handlers: list, multipart upload, delete.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use vestra_core::error::CoreError;
use vestra_core::types::DbId;
use vestra_core::upload::{extension_for, validate_image_upload};
use vestra_core::wardrobe::{validate_new_item, NewItemFields};
use vestra_db::models::wardrobe_item::{CreateWardrobeItem, WardrobeItem};
use vestra_db::repositories::WardrobeItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// `GET /api/v1/wardrobe/items`
pub async fn list_items(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<WardrobeItem>>> {
    let items = WardrobeItemRepo::list_by_user(&state.pool, user.id).await?;
    Ok(Json(items))
}

/// Parsed multipart form for item creation.
#[derive(Default)]
struct ItemForm {
    name: Option<String>,
    category: Option<String>,
    dress_code: Option<String>,
    color: Option<String>,
    season: Option<String>,
    notes: Option<String>,
    image: Option<(String, Vec<u8>)>, // (content_type, bytes)
}

/// `POST /api/v1/wardrobe/items`
///
/// Multipart body with metadata fields plus an `image` part. Metadata and
/// image constraints are checked before any storage or database write.
pub async fn create_item(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<WardrobeItem>)> {
    let mut form = ItemForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "image" => {
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::BadRequest("Image part missing content type".into()))?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read image: {e}")))?;
                form.image = Some((content_type, bytes.to_vec()));
            }
            other => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read field: {e}")))?;
                match other {
                    "name" => form.name = Some(value),
                    "category" => form.category = Some(value),
                    "dress_code" => form.dress_code = Some(value),
                    "color" => form.color = Some(value),
                    "season" => form.season = Some(value),
                    "notes" => form.notes = Some(value),
                    _ => {} // unknown fields are ignored
                }
            }
        }
    }

    let fields = NewItemFields {
        name: form.name.unwrap_or_default(),
        category: form.category.unwrap_or_default(),
        dress_code: form.dress_code.unwrap_or_default(),
        color: none_if_blank(form.color),
        season: none_if_blank(form.season),
        notes: none_if_blank(form.notes),
    };
    validate_new_item(&fields)?;

    let (content_type, bytes) = form
        .image
        .ok_or_else(|| CoreError::Validation("Item image is required".to_string()))?;
    validate_image_upload(&content_type, bytes.len())?;

    let key = format!("{}/{}.{}", user.id, Uuid::new_v4(), extension_for(&content_type));
    state.store.put(&key, &bytes).await?;

    let item = WardrobeItemRepo::create(
        &state.pool,
        &CreateWardrobeItem {
            user_id: user.id,
            name: fields.name.trim().to_string(),
            category: fields.category.trim().to_string(),
            dress_code: fields.dress_code.trim().to_string(),
            color: fields.color.map(|c| c.trim().to_string()),
            season: fields.season.map(|s| s.trim().to_string()),
            notes: fields.notes.map(|n| n.trim().to_string()),
            image_path: key,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, item_id = %item.id, "Wardrobe item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `DELETE /api/v1/wardrobe/items/{id}`
///
/// Removes the stored image first, then the row. An already-gone image does
/// not block row deletion.
pub async fn delete_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let Some(item) = WardrobeItemRepo::find_for_user(&state.pool, user.id, id).await? else {
        return Err(CoreError::NotFound {
            entity: "Wardrobe item",
            id,
        }
        .into());
    };

    state.store.remove(&item.image_path).await?;
    WardrobeItemRepo::delete_for_user(&state.pool, user.id, id).await?;

    Ok(Json(MessageResponse {
        message: "Item deleted",
    }))
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
