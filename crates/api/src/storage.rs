//! Private filesystem object store with HMAC-signed URL access.
//!
//! Wardrobe images are written under a configured root directory and are never
//! served directly. Clients obtain a time-limited signed URL whose signature is
//! an HMAC-SHA256 over `"{path}|{expiry}"`; the object route verifies the
//! signature and expiry before streaming bytes back.

use std::path::{Path, PathBuf};

use hmac::{Hmac, Mac};
use sha2::Sha256;
use vestra_core::error::CoreError;

use crate::config::StorageConfig;

type HmacSha256 = Hmac<Sha256>;

/// A signed, time-limited URL for a stored object.
#[derive(Debug, serde::Serialize)]
pub struct SignedUrl {
    /// Full URL including `exp` and `sig` query parameters.
    pub url: String,
    /// Expiry as a UTC Unix timestamp.
    pub expires_at: i64,
}

/// Filesystem-backed object store.
pub struct ObjectStore {
    root: PathBuf,
    signing_secret: String,
    public_base_url: String,
    default_expiry_secs: u64,
}

impl ObjectStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root),
            signing_secret: config.signing_secret.clone(),
            public_base_url: config.public_base_url.clone(),
            default_expiry_secs: config.default_url_expiry_secs,
        }
    }

    /// Write an object under the given key, creating parent directories.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CoreError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Internal(format!("Failed to create object dir: {e}")))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write object: {e}")))
    }

    /// Read an object's bytes. Returns `NotFound`-style validation error when absent.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, CoreError> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CoreError::Validation("Object not found".to_string()))
            }
            Err(e) => Err(CoreError::Internal(format!("Failed to read object: {e}"))),
        }
    }

    /// Delete an object if it exists. Missing objects are not an error.
    pub async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Internal(format!("Failed to delete object: {e}"))),
        }
    }

    /// Produce a signed URL for the given key using the default expiry.
    pub fn sign(&self, key: &str) -> Result<SignedUrl, CoreError> {
        self.sign_with_expiry(key, self.default_expiry_secs)
    }

    /// Produce a signed URL expiring `expiry_secs` from now.
    pub fn sign_with_expiry(&self, key: &str, expiry_secs: u64) -> Result<SignedUrl, CoreError> {
        validate_key(key)?;
        let expires_at = chrono::Utc::now().timestamp() + expiry_secs as i64;
        let sig = self.signature(key, expires_at)?;
        let url = format!(
            "{}/api/v1/storage/object/{key}?exp={expires_at}&sig={sig}",
            self.public_base_url
        );
        Ok(SignedUrl { url, expires_at })
    }

    /// Verify the signature and expiry for an object request.
    pub fn verify(&self, key: &str, expires_at: i64, sig: &str) -> Result<(), CoreError> {
        validate_key(key)?;
        if chrono::Utc::now().timestamp() > expires_at {
            return Err(CoreError::Forbidden("Signed URL has expired".to_string()));
        }
        let expected = self.signature(key, expires_at)?;
        // Constant-time comparison via the Mac verify API.
        let mut mac = self.mac()?;
        mac.update(format!("{key}|{expires_at}").as_bytes());
        let provided = hex_decode(sig)
            .ok_or_else(|| CoreError::Forbidden("Invalid signature".to_string()))?;
        if mac.verify_slice(&provided).is_err() {
            tracing::warn!(%key, expected_len = expected.len(), "Rejected bad object signature");
            return Err(CoreError::Forbidden("Invalid signature".to_string()));
        }
        Ok(())
    }

    fn signature(&self, key: &str, expires_at: i64) -> Result<String, CoreError> {
        let mut mac = self.mac()?;
        mac.update(format!("{key}|{expires_at}").as_bytes());
        let digest = mac.finalize().into_bytes();
        Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
    }

    fn mac(&self) -> Result<HmacSha256, CoreError> {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .map_err(|e| CoreError::Internal(format!("HMAC init failed: {e}")))
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, CoreError> {
        validate_key(key)?;
        Ok(self.root.join(Path::new(key)))
    }
}

/// Reject keys that could escape the storage root.
fn validate_key(key: &str) -> Result<(), CoreError> {
    if key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..")
    {
        return Err(CoreError::Validation("Invalid object key".to_string()));
    }
    Ok(())
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(root: &Path) -> ObjectStore {
        ObjectStore::new(&StorageConfig {
            root: root.to_string_lossy().into_owned(),
            signing_secret: "test-signing-secret".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
            default_url_expiry_secs: 3600,
        })
    }

    #[tokio::test]
    async fn test_put_get_remove_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = test_store(dir.path());

        store
            .put("user-1/item.png", b"png-bytes")
            .await
            .expect("put should succeed");
        let bytes = store.get("user-1/item.png").await.expect("get should succeed");
        assert_eq!(bytes, b"png-bytes");

        store.remove("user-1/item.png").await.expect("remove");
        assert!(store.get("user-1/item.png").await.is_err());

        // Removing a missing object is not an error.
        store.remove("user-1/item.png").await.expect("idempotent remove");
    }

    #[tokio::test]
    async fn test_sign_and_verify() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = test_store(dir.path());

        let signed = store.sign("user-1/item.png").expect("sign");
        assert!(signed.url.contains("/api/v1/storage/object/user-1/item.png?exp="));
        assert!(signed.expires_at > chrono::Utc::now().timestamp());

        // Extract exp and sig back out of the URL.
        let query = signed.url.split('?').nth(1).expect("query string");
        let mut exp = 0i64;
        let mut sig = String::new();
        for pair in query.split('&') {
            let (k, v) = pair.split_once('=').expect("key=value");
            match k {
                "exp" => exp = v.parse().expect("exp i64"),
                "sig" => sig = v.to_string(),
                _ => {}
            }
        }

        store.verify("user-1/item.png", exp, &sig).expect("valid signature");
        assert!(store.verify("user-1/other.png", exp, &sig).is_err());
        assert!(store.verify("user-1/item.png", exp + 1, &sig).is_err());
    }

    #[tokio::test]
    async fn test_expired_url_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = test_store(dir.path());

        let past = chrono::Utc::now().timestamp() - 10;
        let sig = store.signature("user-1/item.png", past).expect("signature");
        let err = store.verify("user-1/item.png", past, &sig).unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[test]
    fn test_traversal_keys_rejected() {
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("/abs/path").is_err());
        assert!(validate_key("a//b").is_err());
        assert!(validate_key("a/./b").is_err());
        assert!(validate_key("").is_err());
        assert!(validate_key("user-1/item.png").is_ok());
    }
}
