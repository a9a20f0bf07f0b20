//! Saved outfit entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use vestra_core::types::{DbId, Timestamp};

/// A saved outfit: a named set of wardrobe item ids, optionally scheduled
/// for a calendar date. `is_generated` marks outfits accepted from the
/// suggestion pipeline.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Outfit {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub occasion: String,
    pub item_ids: Vec<DbId>,
    pub is_generated: bool,
    pub scheduled_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new outfit.
#[derive(Debug)]
pub struct CreateOutfit {
    pub user_id: DbId,
    pub name: String,
    pub occasion: String,
    pub item_ids: Vec<DbId>,
    pub is_generated: bool,
    pub scheduled_date: Option<NaiveDate>,
}
