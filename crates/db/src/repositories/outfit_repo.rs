//! Repository for saved outfits. All reads and writes are owner-scoped.

use chrono::NaiveDate;
use sqlx::PgPool;
use vestra_core::types::DbId;

use crate::models::outfit::{CreateOutfit, Outfit};

/// Column list for `outfits` queries.
const OUTFIT_COLUMNS: &str = "\
    id, user_id, name, occasion, item_ids, \
    is_generated, scheduled_date, created_at, updated_at";

/// Provides owner-scoped CRUD and scheduling operations for outfits.
pub struct OutfitRepo;

impl OutfitRepo {
    /// Insert a new outfit.
    pub async fn create(pool: &PgPool, input: &CreateOutfit) -> Result<Outfit, sqlx::Error> {
        let query = format!(
            "INSERT INTO outfits (\
                user_id, name, occasion, item_ids, is_generated, scheduled_date\
             ) VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {OUTFIT_COLUMNS}"
        );
        sqlx::query_as::<_, Outfit>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.occasion)
            .bind(&input.item_ids)
            .bind(input.is_generated)
            .bind(input.scheduled_date)
            .fetch_one(pool)
            .await
    }

    /// List a user's outfits, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Outfit>, sqlx::Error> {
        let query = format!(
            "SELECT {OUTFIT_COLUMNS} FROM outfits \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Outfit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the user's scheduled outfits, ascending by date (calendar view).
    pub async fn list_scheduled_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Outfit>, sqlx::Error> {
        let query = format!(
            "SELECT {OUTFIT_COLUMNS} FROM outfits \
             WHERE user_id = $1 AND scheduled_date IS NOT NULL \
             ORDER BY scheduled_date ASC"
        );
        sqlx::query_as::<_, Outfit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set or clear an outfit's scheduled date. Returns the updated row, or
    /// `None` if the outfit does not exist or belongs to another user.
    pub async fn set_schedule(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        scheduled_date: Option<NaiveDate>,
    ) -> Result<Option<Outfit>, sqlx::Error> {
        let query = format!(
            "UPDATE outfits SET scheduled_date = $3, updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {OUTFIT_COLUMNS}"
        );
        sqlx::query_as::<_, Outfit>(&query)
            .bind(id)
            .bind(user_id)
            .bind(scheduled_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's outfits. Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM outfits WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
