//! Password-reset OTP model.

use sqlx::FromRow;
use vestra_core::types::{DbId, Timestamp};

/// A pending password reset. Stores the SHA-256 hash of a 6-digit OTP; the
/// plaintext code goes out by email only.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordReset {
    pub id: DbId,
    pub user_id: DbId,
    pub otp_hash: String,
    pub expires_at: Timestamp,
    pub consumed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
