//! Anthropic messages API client (the `claude` provider).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{CompletionRequest, MAX_TOKENS, Provider, http_client};
use crate::errors::ProviderError;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: Cow<'a, str>,
    messages: Vec<AnthropicMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

/// Individual content block in a messages response.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

/// Client for the Anthropic messages API.
pub struct Anthropic {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl Anthropic {
    /// Create a new client. `endpoint` is the API origin
    /// (e.g., `https://api.anthropic.com`).
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client: http_client(),
            endpoint,
            api_key,
            model,
        }
    }

    fn url(&self) -> String {
        format!("{}/v1/messages", self.endpoint.trim_end_matches('/'))
    }

    /// Concatenate the text blocks of a response.
    fn extract_text(response: &AnthropicResponse) -> String {
        response
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .map(|block| block.text.as_str())
            .collect()
    }
}

#[async_trait]
impl Provider for Anthropic {
    fn name(&self) -> &str {
        "claude"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let api_request = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: Cow::Borrowed(&request.system),
            messages: vec![AnthropicMessage {
                role: "user",
                content: Cow::Borrowed(&request.user),
            }],
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(self.url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), body));
        }

        let api_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let text = Self::extract_text(&api_response);
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let client = Anthropic::new(
            "https://api.anthropic.com/".to_string(),
            "key".to_string(),
            "claude-3-5-sonnet-latest".to_string(),
        );
        assert_eq!(client.url(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn test_extract_text_filters_non_text_blocks() {
        let response: AnthropicResponse = serde_json::from_str(
            r#"{"content":[
                {"type":"text","text":"你好"},
                {"type":"tool_use"},
                {"type":"text","text":"世界"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(Anthropic::extract_text(&response), "你好世界");
    }

    #[test]
    fn test_request_serialization() {
        let request = AnthropicRequest {
            model: "claude-3-5-sonnet-latest",
            max_tokens: MAX_TOKENS,
            system: Cow::Borrowed("You are a translator."),
            messages: vec![AnthropicMessage {
                role: "user",
                content: Cow::Borrowed("Hello"),
            }],
            temperature: 0.3,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-5-sonnet-latest");
        assert_eq!(json["max_tokens"], 2048);
        assert_eq!(json["system"], "You are a translator.");
        assert_eq!(json["messages"][0]["content"], "Hello");
    }
}
