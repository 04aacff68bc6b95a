use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    /// Caller's turns, serialized exactly as received.
    messages: &'a [Value],
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// One block of the reply. Non-text blocks (e.g. `tool_use`) carry no `text`.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for the Anthropic Messages API (and compatible endpoints).
///
/// Implements [`ChatClient`] so the relay use case stays decoupled from
/// transport and serialization details. The transport keeps reqwest's
/// default timeouts and never retries.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), MESSAGES_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pull the first text segment out of a raw Messages API body.
    fn first_text(body: &str) -> Result<String, DomainError> {
        let api_response: ApiResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::malformed(format!("failed to parse response: {e}")))?;

        api_response
            .content
            .into_iter()
            .find_map(|block| {
                if block.text.is_none() {
                    debug!(
                        "AnthropicClient: skipping {} block without text",
                        block.kind.as_deref().unwrap_or("untyped")
                    );
                }
                block.text
            })
            .ok_or_else(|| DomainError::malformed("reply contained no text segment"))
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let body = ApiRequest {
            model: request.model(),
            max_tokens: request.max_tokens(),
            system: request.system(),
            messages: request.messages(),
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("AnthropicClient: request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("AnthropicClient: failed to read body: {e}")))?;

        if !status.is_success() {
            debug!("AnthropicClient: API returned {status}");
            return Err(DomainError::upstream(status.as_u16(), text));
        }

        Self::first_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = AnthropicClient::new("k", "http://localhost:1234/");
        assert_eq!(client.url(), "http://localhost:1234/v1/messages");
    }

    #[test]
    fn first_text_takes_first_segment_verbatim() {
        let body = r#"{
            "id": "msg_01",
            "content": [
                {"type": "text", "text": "  Botox is $10-12 per unit.\n"},
                {"type": "text", "text": "second"}
            ],
            "stop_reason": "end_turn"
        }"#;
        assert_eq!(
            AnthropicClient::first_text(body).unwrap(),
            "  Botox is $10-12 per unit.\n"
        );
    }

    #[test]
    fn first_text_skips_blocks_without_text() {
        let body = r#"{"content": [
            {"type": "tool_use", "id": "t1", "name": "lookup", "input": {}},
            {"type": "text", "text": "found it"}
        ]}"#;
        assert_eq!(AnthropicClient::first_text(body).unwrap(), "found it");
    }

    #[test]
    fn first_text_rejects_empty_content() {
        let err = AnthropicClient::first_text(r#"{"content": []}"#).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn first_text_rejects_non_json() {
        let err = AnthropicClient::first_text("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.is_malformed());
    }
}
