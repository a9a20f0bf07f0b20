//! Outfit-suggestion pipeline logic: request validation, sanitization,
//! prompt construction, model-reply parsing, and fallback synthesis.
//!
//! Everything here is deterministic and side-effect free. The actual call to
//! the model gateway lives in `vestra-stylist`; this module defines what gets
//! sent and how the free-text reply is turned into a structured result.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum number of wardrobe items required to request a suggestion.
pub const MIN_ITEMS: usize = 3;

/// Maximum length of the occasion label, in characters.
pub const MAX_OCCASION_CHARS: usize = 50;

/// Maximum length of an item name passed to the model.
pub const MAX_NAME_CHARS: usize = 100;

/// Maximum length of an item category or dress code passed to the model.
pub const MAX_CATEGORY_CHARS: usize = 50;

/// Maximum length of an item color passed to the model.
pub const MAX_COLOR_CHARS: usize = 30;

/// Placeholder used when an item has no color.
pub const NO_COLOR_PLACEHOLDER: &str = "no color";

/// Styling tip used for every fallback suggestion.
pub const FALLBACK_STYLING_TIP: &str = "Mix and match these pieces for a great look!";

/// Upper bound on the raw model text echoed back as fallback `reasoning`.
/// Replies at or under the cap are passed through verbatim.
pub const MAX_FALLBACK_REASONING_CHARS: usize = 2000;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Client-supplied summary of one wardrobe item.
///
/// Identifiers are opaque strings; the pipeline never interprets them beyond
/// equality. `color` is optional and replaced by [`NO_COLOR_PLACEHOLDER`]
/// during sanitization. Every field defaults on deserialization: an absent
/// field becomes empty and is rejected by [`validate_request`], not by the
/// deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub dress_code: String,
    pub color: Option<String>,
}

/// Sanitized item fields, safe to embed in external-facing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedItem {
    pub name: String,
    pub category: String,
    pub dress_code: String,
    pub color: String,
}

/// Structured outfit recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    /// Item identifiers selected for the outfit.
    pub outfit: Vec<String>,
    /// Why this combination works.
    pub reasoning: String,
    /// How to wear and accessorize the outfit.
    pub styling_tips: String,
}

/// Result of interpreting a model reply.
///
/// The two-tier strategy guarantees the caller always gets a well-formed
/// suggestion-shaped value: either the JSON object extracted from the reply
/// (trusted as-is, no schema validation) or a deterministic fallback built
/// from the request's own items.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SuggestionOutcome {
    /// The reply contained a parseable JSON object; returned verbatim.
    Parsed(serde_json::Value),
    /// The reply could not be parsed; a synthesized default.
    Fallback(OutfitSuggestion),
}

impl SuggestionOutcome {
    /// `true` when this outcome came from the fallback path.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SuggestionOutcome::Fallback(_))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a suggestion request. Fail-fast: the first violation is returned
/// and nothing else is inspected.
///
/// Rules:
/// - at least [`MIN_ITEMS`] items;
/// - occasion non-empty and at most [`MAX_OCCASION_CHARS`] characters;
/// - every item carries non-empty `id`, `name`, `category`, `dress_code`.
pub fn validate_request(items: &[ItemSummary], occasion: &str) -> Result<(), CoreError> {
    if items.len() < MIN_ITEMS {
        return Err(CoreError::Validation(
            "At least 3 items are required".into(),
        ));
    }

    if occasion.is_empty() || occasion.chars().count() > MAX_OCCASION_CHARS {
        return Err(CoreError::Validation(
            "Valid occasion is required (max 50 characters)".into(),
        ));
    }

    for item in items {
        if item.id.is_empty()
            || item.name.is_empty()
            || item.category.is_empty()
            || item.dress_code.is_empty()
        {
            return Err(CoreError::Validation("Invalid item data structure".into()));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Sanitization
// ---------------------------------------------------------------------------

/// Matches HTML-tag-like runs (`<...>`), removed before the character filter.
fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex"))
}

/// Matches any character outside word characters, whitespace, and hyphen.
fn disallowed_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s-]").expect("static regex"))
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Sanitize an occasion label for inclusion in external-facing text.
///
/// trim -> truncate to [`MAX_OCCASION_CHARS`] -> drop tag-like `<...>` runs ->
/// strip characters outside `[\w\s-]` -> trim again. The transform is
/// idempotent: sanitizing an already-sanitized label is a no-op.
pub fn sanitize_occasion(occasion: &str) -> String {
    let truncated = truncate_chars(occasion.trim(), MAX_OCCASION_CHARS);
    let untagged = tag_pattern().replace_all(&truncated, "");
    let filtered = disallowed_pattern().replace_all(&untagged, "");
    filtered.trim().to_string()
}

/// Sanitize one item's fields: truncation to the per-field bounds, and the
/// [`NO_COLOR_PLACEHOLDER`] substituted for an absent or empty color.
pub fn sanitize_item(item: &ItemSummary) -> SanitizedItem {
    let color = match item.color.as_deref() {
        Some(c) if !c.is_empty() => truncate_chars(c, MAX_COLOR_CHARS),
        _ => NO_COLOR_PLACEHOLDER.to_string(),
    };

    SanitizedItem {
        name: truncate_chars(&item.name, MAX_NAME_CHARS),
        category: truncate_chars(&item.category, MAX_CATEGORY_CHARS),
        dress_code: truncate_chars(&item.dress_code, MAX_CATEGORY_CHARS),
        color,
    }
}

// ---------------------------------------------------------------------------
// Prompt construction
// ---------------------------------------------------------------------------

/// Render the fixed instruction template for the model.
///
/// Inputs must already be sanitized; this function only formats.
pub fn build_prompt(occasion: &str, items: &[SanitizedItem]) -> String {
    let descriptions = items
        .iter()
        .map(|i| format!("{} ({}, {}, {})", i.name, i.category, i.dress_code, i.color))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a fashion stylist AI. Create a stylish outfit for a {occasion} occasion.\n\
         \n\
         Available items: {descriptions}\n\
         \n\
         Provide a response in this exact JSON format:\n\
         {{\n\
         \x20 \"outfit\": [list of item IDs that work together],\n\
         \x20 \"reasoning\": \"Why this combination works\",\n\
         \x20 \"styling_tips\": \"How to wear and accessorize this outfit\"\n\
         }}\n\
         \n\
         Select 3-5 items that complement each other based on color, style, and the occasion."
    )
}

// ---------------------------------------------------------------------------
// Reply parsing & fallback
// ---------------------------------------------------------------------------

/// Interpret a raw model reply.
///
/// The substring from the first `{` to the last `}` is treated as a JSON
/// candidate. If it parses to a JSON object it is returned untouched -- the
/// model's own output shape is trusted. Anything else (no braces, invalid
/// JSON, or a non-object value) falls back to [`fallback_suggestion`].
pub fn parse_model_reply(raw: &str, item_ids: &[String]) -> SuggestionOutcome {
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if end > start {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw[start..=end]) {
                if value.is_object() {
                    return SuggestionOutcome::Parsed(value);
                }
            }
        }
    }

    SuggestionOutcome::Fallback(fallback_suggestion(raw, item_ids))
}

/// Deterministic substitute suggestion for an unparseable reply.
///
/// `outfit` is the first [`MIN_ITEMS`] request identifiers in input order,
/// `reasoning` echoes the raw reply (capped at
/// [`MAX_FALLBACK_REASONING_CHARS`]), and `styling_tips` is the fixed
/// [`FALLBACK_STYLING_TIP`].
pub fn fallback_suggestion(raw: &str, item_ids: &[String]) -> OutfitSuggestion {
    OutfitSuggestion {
        outfit: item_ids.iter().take(MIN_ITEMS).cloned().collect(),
        reasoning: truncate_chars(raw, MAX_FALLBACK_REASONING_CHARS),
        styling_tips: FALLBACK_STYLING_TIP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ItemSummary {
        ItemSummary {
            id: id.to_string(),
            name: format!("Item {id}"),
            category: "Top".to_string(),
            dress_code: "Casual".to_string(),
            color: Some("Blue".to_string()),
        }
    }

    fn three_items() -> Vec<ItemSummary> {
        vec![item("a"), item("b"), item("c")]
    }

    // ---- validation ----

    #[test]
    fn test_fewer_than_three_items_rejected() {
        let items = vec![item("a"), item("b")];
        let err = validate_request(&items, "Formal").unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("At least 3 items")));
    }

    #[test]
    fn test_absent_fields_deserialize_empty_and_fail_validation() {
        // An item without an id must reach validation (as an empty string),
        // not die in the deserializer.
        let items: Vec<ItemSummary> = serde_json::from_value(serde_json::json!([
            { "name": "Tee", "category": "Top", "dress_code": "Casual" },
            { "id": "b", "name": "Jeans", "category": "Bottom", "dress_code": "Casual" },
            { "id": "c", "name": "Boots", "category": "Shoes", "dress_code": "Casual" },
        ]))
        .expect("absent fields must deserialize as defaults");
        assert!(items[0].id.is_empty());

        let err = validate_request(&items, "Formal").unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg == "Invalid item data structure"));
    }

    #[test]
    fn test_empty_occasion_rejected() {
        let err = validate_request(&three_items(), "").unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("occasion")));
    }

    #[test]
    fn test_overlong_occasion_rejected() {
        let occasion = "x".repeat(51);
        let err = validate_request(&three_items(), &occasion).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("max 50")));
    }

    #[test]
    fn test_occasion_at_limit_accepted() {
        let occasion = "x".repeat(50);
        assert!(validate_request(&three_items(), &occasion).is_ok());
    }

    #[test]
    fn test_item_missing_field_rejected() {
        for field in ["id", "name", "category", "dress_code"] {
            let mut items = three_items();
            match field {
                "id" => items[1].id.clear(),
                "name" => items[1].name.clear(),
                "category" => items[1].category.clear(),
                _ => items[1].dress_code.clear(),
            }
            let err = validate_request(&items, "Formal").unwrap_err();
            assert!(
                matches!(err, CoreError::Validation(msg) if msg == "Invalid item data structure"),
                "missing {field} must be rejected"
            );
        }
    }

    // ---- sanitization ----

    #[test]
    fn test_sanitize_occasion_strips_script_tag_and_punctuation() {
        assert_eq!(sanitize_occasion("Casual!!! <script>"), "Casual");
    }

    #[test]
    fn test_sanitize_occasion_trims_and_truncates() {
        let long = format!("  {}  ", "a".repeat(80));
        let sanitized = sanitize_occasion(&long);
        assert_eq!(sanitized.chars().count(), 50);
    }

    #[test]
    fn test_sanitize_occasion_keeps_word_chars_whitespace_hyphen() {
        assert_eq!(
            sanitize_occasion("Date-night dinner_2024"),
            "Date-night dinner_2024"
        );
    }

    #[test]
    fn test_sanitize_occasion_is_idempotent() {
        for input in ["Casual!!! <script>", "  Formal  ", "Beach party <b>now</b>!"] {
            let once = sanitize_occasion(input);
            let twice = sanitize_occasion(&once);
            assert_eq!(once, twice, "sanitizing {input:?} twice must be stable");
        }
    }

    #[test]
    fn test_sanitize_item_truncates_and_defaults_color() {
        let raw = ItemSummary {
            id: "a".into(),
            name: "n".repeat(150),
            category: "c".repeat(80),
            dress_code: "d".repeat(80),
            color: None,
        };
        let sanitized = sanitize_item(&raw);
        assert_eq!(sanitized.name.chars().count(), 100);
        assert_eq!(sanitized.category.chars().count(), 50);
        assert_eq!(sanitized.dress_code.chars().count(), 50);
        assert_eq!(sanitized.color, NO_COLOR_PLACEHOLDER);
    }

    #[test]
    fn test_sanitize_item_empty_color_gets_placeholder() {
        let mut raw = item("a");
        raw.color = Some(String::new());
        assert_eq!(sanitize_item(&raw).color, NO_COLOR_PLACEHOLDER);
    }

    #[test]
    fn test_sanitize_item_is_idempotent() {
        let first = sanitize_item(&item("a"));
        let again = sanitize_item(&ItemSummary {
            id: "a".into(),
            name: first.name.clone(),
            category: first.category.clone(),
            dress_code: first.dress_code.clone(),
            color: Some(first.color.clone()),
        });
        assert_eq!(first, again);
    }

    // ---- prompt ----

    #[test]
    fn test_prompt_contains_occasion_and_descriptions() {
        let items: Vec<SanitizedItem> = three_items().iter().map(sanitize_item).collect();
        let prompt = build_prompt("Formal", &items);
        assert!(prompt.contains("a Formal occasion"));
        assert!(prompt.contains("Item a (Top, Casual, Blue)"));
        assert!(prompt.contains("Item a (Top, Casual, Blue), Item b (Top, Casual, Blue)"));
        assert!(prompt.contains("\"styling_tips\""));
        assert!(prompt.contains("Select 3-5 items"));
    }

    // ---- parsing & fallback ----

    fn ids() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into(), "d".into()]
    }

    #[test]
    fn test_valid_json_reply_returned_verbatim() {
        let raw = r#"Sure! Here you go:
{"outfit": ["b", "c", "d"], "reasoning": "they match", "styling_tips": "roll the sleeves"}
Enjoy!"#;
        match parse_model_reply(raw, &ids()) {
            SuggestionOutcome::Parsed(value) => {
                assert_eq!(value["outfit"], serde_json::json!(["b", "c", "d"]));
                assert_eq!(value["reasoning"], "they match");
                assert_eq!(value["styling_tips"], "roll the sleeves");
            }
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text_reply_falls_back() {
        let raw = "I love combo a and b";
        match parse_model_reply(raw, &["a".into(), "b".into(), "c".into()]) {
            SuggestionOutcome::Fallback(s) => {
                assert_eq!(s.outfit, vec!["a", "b", "c"]);
                assert_eq!(s.reasoning, "I love combo a and b");
                assert_eq!(s.styling_tips, FALLBACK_STYLING_TIP);
            }
            other => panic!("expected Fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_braces_fall_back() {
        let raw = "looks like json { but it is } not { valid";
        assert!(parse_model_reply(raw, &ids()).is_fallback());
    }

    #[test]
    fn test_fallback_invariants() {
        let id_list = ids();
        let suggestion = fallback_suggestion("garbage reply", &id_list);
        assert_eq!(suggestion.outfit.len(), 3);
        for id in &suggestion.outfit {
            assert!(id_list.contains(id), "fallback id {id} must come from the request");
        }
        // Input order preserved.
        assert_eq!(suggestion.outfit, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fallback_reasoning_capped() {
        let raw = "r".repeat(5000);
        let suggestion = fallback_suggestion(&raw, &ids());
        assert_eq!(
            suggestion.reasoning.chars().count(),
            MAX_FALLBACK_REASONING_CHARS
        );
    }

    #[test]
    fn test_outcome_serializes_without_tag() {
        let outcome = SuggestionOutcome::Fallback(fallback_suggestion("text", &ids()));
        let value = serde_json::to_value(&outcome).expect("serialize");
        assert!(value.get("outfit").is_some(), "untagged serialization expected");
        assert!(value.get("Fallback").is_none());
    }
}
