//! Wardrobe item field rules and account input rules.
//!
//! Vocabularies and bounds mirror what the upload form offers; validation
//! runs server-side before anything touches storage or the database.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Valid item categories.
pub const CATEGORIES: &[&str] = &["Top", "Bottom", "Dress", "Outerwear", "Shoes", "Accessories"];

/// Valid dress codes.
pub const DRESS_CODES: &[&str] = &[
    "Casual",
    "Formal",
    "Business",
    "Party",
    "Athletic",
    "Streetwear",
];

/// Valid seasons.
pub const SEASONS: &[&str] = &["Spring", "Summer", "Fall", "Winter", "All Season"];

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

/// Maximum item name length.
pub const MAX_ITEM_NAME_CHARS: usize = 100;

/// Maximum color length.
pub const MAX_ITEM_COLOR_CHARS: usize = 30;

/// Maximum season length.
pub const MAX_ITEM_SEASON_CHARS: usize = 20;

/// Maximum notes length.
pub const MAX_ITEM_NOTES_CHARS: usize = 1000;

/// Maximum email length.
pub const MAX_EMAIL_CHARS: usize = 255;

/// Password length bounds.
pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MAX_PASSWORD_CHARS: usize = 128;

/// Maximum full name length.
pub const MAX_FULL_NAME_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Item validation
// ---------------------------------------------------------------------------

/// Fields of a new wardrobe item, as submitted by the upload form.
#[derive(Debug, Clone)]
pub struct NewItemFields {
    pub name: String,
    pub category: String,
    pub dress_code: String,
    pub color: Option<String>,
    pub season: Option<String>,
    pub notes: Option<String>,
}

/// Validate a new wardrobe item's metadata.
pub fn validate_new_item(fields: &NewItemFields) -> Result<(), CoreError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Item name is required".into()));
    }
    if name.chars().count() > MAX_ITEM_NAME_CHARS {
        return Err(CoreError::Validation(
            "Item name must be less than 100 characters".into(),
        ));
    }

    if !CATEGORIES.contains(&fields.category.trim()) {
        return Err(CoreError::Validation(format!(
            "Invalid category '{}'. Must be one of: {CATEGORIES:?}",
            fields.category
        )));
    }

    if !DRESS_CODES.contains(&fields.dress_code.trim()) {
        return Err(CoreError::Validation(format!(
            "Invalid dress code '{}'. Must be one of: {DRESS_CODES:?}",
            fields.dress_code
        )));
    }

    if let Some(color) = &fields.color {
        if color.trim().chars().count() > MAX_ITEM_COLOR_CHARS {
            return Err(CoreError::Validation(
                "Color must be less than 30 characters".into(),
            ));
        }
    }

    if let Some(season) = &fields.season {
        let season = season.trim();
        if !season.is_empty() && !SEASONS.contains(&season) {
            return Err(CoreError::Validation(format!(
                "Invalid season '{season}'. Must be one of: {SEASONS:?}"
            )));
        }
    }

    if let Some(notes) = &fields.notes {
        if notes.trim().chars().count() > MAX_ITEM_NOTES_CHARS {
            return Err(CoreError::Validation(
                "Notes must be less than 1000 characters".into(),
            ));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Account input validation
// ---------------------------------------------------------------------------

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex"))
}

fn full_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("static regex"))
}

/// Validate an email address: well-formed and at most 255 characters.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let email = email.trim();
    if email.chars().count() > MAX_EMAIL_CHARS || !email_pattern().is_match(email) {
        return Err(CoreError::Validation(
            "Please enter a valid email address".into(),
        ));
    }
    Ok(())
}

/// Validate a password: 8 to 128 characters.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_CHARS {
        return Err(CoreError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }
    if len > MAX_PASSWORD_CHARS {
        return Err(CoreError::Validation(
            "Password must be less than 128 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a full name: non-empty, at most 100 characters, letters, spaces,
/// hyphens, and apostrophes only.
pub fn validate_full_name(full_name: &str) -> Result<(), CoreError> {
    let name = full_name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Full name is required".into()));
    }
    if name.chars().count() > MAX_FULL_NAME_CHARS {
        return Err(CoreError::Validation(
            "Full name must be less than 100 characters".into(),
        ));
    }
    if !full_name_pattern().is_match(name) {
        return Err(CoreError::Validation(
            "Full name can only contain letters, spaces, hyphens, and apostrophes".into(),
        ));
    }
    Ok(())
}
