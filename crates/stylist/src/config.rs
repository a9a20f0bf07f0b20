//! Stylist gateway configuration loaded from environment variables.

/// Default gateway base URL.
const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";

/// Default model identifier.
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Configuration for the model gateway.
///
/// The API key is optional at load time: a missing credential is a
/// call-time `Configuration` failure, not a startup failure, so the rest of
/// the application runs without it.
#[derive(Debug, Clone)]
pub struct StylistConfig {
    /// Bearer credential for the gateway. `None` until configured.
    pub api_key: Option<String>,
    /// Gateway base URL, e.g. `https://ai.gateway.lovable.dev`.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl StylistConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Required | Default                            |
    /// |--------------------|----------|------------------------------------|
    /// | `STYLIST_API_KEY`  | no       | -- (calls fail until set)          |
    /// | `STYLIST_BASE_URL` | no       | `https://ai.gateway.lovable.dev`   |
    /// | `STYLIST_MODEL`    | no       | `google/gemini-2.5-flash`          |
    pub fn from_env() -> Self {
        let api_key = std::env::var("STYLIST_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let base_url =
            std::env::var("STYLIST_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("STYLIST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        Self {
            api_key,
            base_url,
            model,
        }
    }
}
