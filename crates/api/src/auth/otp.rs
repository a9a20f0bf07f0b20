//! One-time password generation and hashing for the reset-by-OTP flow.
//!
//! Codes are 6 decimal digits; only the SHA-256 hash is stored server-side.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Lifetime of a reset code, in minutes.
pub const OTP_EXPIRY_MINS: i64 = 10;

/// Generate a random 6-digit code, zero-padded.
pub fn generate_otp() -> String {
    let code: u32 = rand::rng().random_range(0..1_000_000);
    format!("{code:06}")
}

/// Compute the SHA-256 hex digest of a code.
pub fn hash_otp(otp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(otp.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..50 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_otp_hash_is_deterministic() {
        assert_eq!(hash_otp("123456"), hash_otp("123456"));
        assert_ne!(hash_otp("123456"), hash_otp("654321"));
        assert_eq!(hash_otp("123456").len(), 64);
    }
}
