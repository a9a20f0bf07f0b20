//! REST client for the model gateway's chat-completions endpoint.
//!
//! Wraps the OpenAI-compatible `POST /v1/chat/completions` API using
//! [`reqwest`]. One call, fully buffered; no streaming, no retries.

use serde::Deserialize;

/// HTTP client for the model gateway.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

/// Response body of a chat-completions call. Only the fields the pipeline
/// reads are modeled.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Errors from the gateway REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Gateway error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The gateway replied 2xx but the body carried no message content.
    #[error("Gateway reply contained no message content")]
    MissingContent,
}

impl GatewayClient {
    /// Create a new client for the given gateway and model.
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            model,
        }
    }

    /// Send a single-turn user prompt and return the model's text reply.
    ///
    /// The entire reply is buffered before returning; the raw text is handed
    /// back as-is for downstream parsing.
    pub async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, GatewayError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                }
            ],
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<ChatCompletionResponse>().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GatewayError::MissingContent)
    }
}
