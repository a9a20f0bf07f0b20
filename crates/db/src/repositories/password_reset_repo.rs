//! Repository for password-reset OTP records.

use sqlx::PgPool;
use vestra_core::types::{DbId, Timestamp};

use crate::models::password_reset::PasswordReset;

/// Column list for `password_resets` queries.
const RESET_COLUMNS: &str = "id, user_id, otp_hash, expires_at, consumed_at, created_at";

/// Provides create/lookup/consume operations for password resets.
pub struct PasswordResetRepo;

impl PasswordResetRepo {
    /// Create a new reset record, invalidating any earlier pending ones for
    /// the same user.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        otp_hash: &str,
        expires_at: Timestamp,
    ) -> Result<PasswordReset, sqlx::Error> {
        sqlx::query(
            "UPDATE password_resets SET consumed_at = now() \
             WHERE user_id = $1 AND consumed_at IS NULL",
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        let query = format!(
            "INSERT INTO password_resets (user_id, otp_hash, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING {RESET_COLUMNS}"
        );
        sqlx::query_as::<_, PasswordReset>(&query)
            .bind(user_id)
            .bind(otp_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find the pending (unconsumed, unexpired) reset for a user and OTP hash.
    pub async fn find_pending(
        pool: &PgPool,
        user_id: DbId,
        otp_hash: &str,
    ) -> Result<Option<PasswordReset>, sqlx::Error> {
        let query = format!(
            "SELECT {RESET_COLUMNS} FROM password_resets \
             WHERE user_id = $1 \
               AND otp_hash = $2 \
               AND consumed_at IS NULL \
               AND expires_at > now() \
             ORDER BY created_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, PasswordReset>(&query)
            .bind(user_id)
            .bind(otp_hash)
            .fetch_optional(pool)
            .await
    }

    /// Mark a reset record as consumed.
    pub async fn consume(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE password_resets SET consumed_at = now() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
