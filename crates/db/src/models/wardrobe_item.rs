//! Wardrobe item entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vestra_core::types::{DbId, Timestamp};

/// Full wardrobe item row.
///
/// `image_path` is an opaque storage key (`<user_id>/<uuid>.<ext>`), not a
/// URL; clients obtain time-limited signed URLs through the storage API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WardrobeItem {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub category: String,
    pub dress_code: String,
    pub color: Option<String>,
    pub season: Option<String>,
    pub notes: Option<String>,
    pub image_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new wardrobe item.
#[derive(Debug)]
pub struct CreateWardrobeItem {
    pub user_id: DbId,
    pub name: String,
    pub category: String,
    pub dress_code: String,
    pub color: Option<String>,
    pub season: Option<String>,
    pub notes: Option<String>,
    pub image_path: String,
}
