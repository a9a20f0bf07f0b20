//! Image upload constraints, enforced before any storage I/O.

use crate::error::CoreError;

/// MIME types accepted for wardrobe item images.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Maximum image size: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Validate an uploaded image's declared content type and size.
pub fn validate_image_upload(content_type: &str, size_bytes: usize) -> Result<(), CoreError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(CoreError::Validation(
            "Please upload a valid image file (JPEG, PNG, or WebP)".into(),
        ));
    }

    if size_bytes > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(
            "Image file size must be less than 5MB".into(),
        ));
    }

    Ok(())
}

/// File extension for a stored image, derived from the MIME type.
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_types_accepted() {
        for ty in ALLOWED_IMAGE_TYPES {
            assert!(validate_image_upload(ty, 1024).is_ok(), "{ty} should pass");
        }
    }

    #[test]
    fn test_disallowed_type_rejected() {
        let err = validate_image_upload("image/gif", 1024).unwrap_err();
        assert!(err.to_string().contains("JPEG, PNG, or WebP"));
    }

    #[test]
    fn test_oversize_rejected() {
        let err = validate_image_upload("image/png", MAX_IMAGE_BYTES + 1).unwrap_err();
        assert!(err.to_string().contains("less than 5MB"));
    }

    #[test]
    fn test_size_at_limit_accepted() {
        assert!(validate_image_upload("image/png", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/webp"), "webp");
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("image/jpg"), "jpg");
    }
}
