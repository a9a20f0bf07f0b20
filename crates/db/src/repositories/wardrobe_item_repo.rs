//! Repository for wardrobe items. All reads and writes are owner-scoped.

use sqlx::PgPool;
use vestra_core::types::DbId;

use crate::models::wardrobe_item::{CreateWardrobeItem, WardrobeItem};

/// Column list for `wardrobe_items` queries.
const ITEM_COLUMNS: &str = "\
    id, user_id, name, category, dress_code, \
    color, season, notes, image_path, \
    created_at, updated_at";

/// Provides owner-scoped CRUD operations for wardrobe items.
pub struct WardrobeItemRepo;

impl WardrobeItemRepo {
    /// Insert a new item.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWardrobeItem,
    ) -> Result<WardrobeItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO wardrobe_items (\
                user_id, name, category, dress_code, \
                color, season, notes, image_path\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.dress_code)
            .bind(input.color.as_deref())
            .bind(input.season.as_deref())
            .bind(input.notes.as_deref())
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// List a user's items, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the user's items by id.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, WardrobeItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's items. Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wardrobe_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
