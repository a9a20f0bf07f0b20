//! The outfit suggestion service.

use vestra_core::error::CoreError;
use vestra_core::suggestion::{
    build_prompt, parse_model_reply, sanitize_item, sanitize_occasion, validate_request,
    ItemSummary, SuggestionOutcome,
};

use crate::client::{GatewayClient, GatewayError};
use crate::config::StylistConfig;

/// Errors from the suggestion pipeline.
///
/// Three-way taxonomy: client-correctable input problems, operator-fixable
/// configuration problems, and transient upstream failures. None are retried.
/// A parse failure is NOT an error -- it resolves to
/// [`SuggestionOutcome::Fallback`].
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    /// The request payload failed validation. Never retried automatically.
    #[error("{0}")]
    InvalidInput(String),

    /// The gateway credential is missing. Fatal until an operator sets it.
    #[error("{0}")]
    Configuration(String),

    /// The upstream call failed. Surfaced as-is, not retried.
    #[error("{0}")]
    Upstream(String),
}

/// Stateless suggestion service: one [`generate`](Self::generate) call per
/// request, no shared mutable state.
pub struct SuggestionService {
    config: StylistConfig,
    client: GatewayClient,
}

impl SuggestionService {
    /// Build a service from gateway configuration.
    pub fn new(config: StylistConfig) -> Self {
        let client = GatewayClient::new(config.base_url.clone(), config.model.clone());
        Self { config, client }
    }

    /// Generate an outfit suggestion for the given items and occasion.
    ///
    /// Validation failures short-circuit before any sanitization or network
    /// I/O; a missing credential fails before the request is built. The
    /// returned outcome is always suggestion-shaped: either the JSON object
    /// the model produced or the deterministic fallback.
    pub async fn generate(
        &self,
        items: &[ItemSummary],
        occasion: &str,
    ) -> Result<SuggestionOutcome, SuggestionError> {
        validate_request(items, occasion).map_err(|e| match e {
            CoreError::Validation(msg) => SuggestionError::InvalidInput(msg),
            other => SuggestionError::InvalidInput(other.to_string()),
        })?;

        let occasion = sanitize_occasion(occasion);
        let sanitized: Vec<_> = items.iter().map(sanitize_item).collect();
        let prompt = build_prompt(&occasion, &sanitized);

        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            SuggestionError::Configuration("STYLIST_API_KEY is not configured".into())
        })?;

        let raw = self
            .client
            .complete(api_key, &prompt)
            .await
            .map_err(|e: GatewayError| SuggestionError::Upstream(e.to_string()))?;

        let item_ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        let outcome = parse_model_reply(&raw, &item_ids);

        match &outcome {
            SuggestionOutcome::Parsed(value) => {
                // The parsed object is returned as-is, but unknown item ids
                // are worth noticing in the logs.
                if let Some(ids) = value.get("outfit").and_then(|v| v.as_array()) {
                    for id in ids.iter().filter_map(|v| v.as_str()) {
                        if !item_ids.iter().any(|known| known == id) {
                            tracing::warn!(item_id = %id, "model selected an id not present in the request");
                        }
                    }
                }
                tracing::debug!(occasion = %occasion, "suggestion parsed from model reply");
            }
            SuggestionOutcome::Fallback(_) => {
                tracing::info!(occasion = %occasion, "model reply was unparseable; serving fallback suggestion");
            }
        }

        Ok(outcome)
    }
}
