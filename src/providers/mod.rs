//! Provider clients for the supported LLM backends.
//!
//! Each backend gets one client implementing the [`Provider`] trait, so the
//! rest of the application can dispatch on a configuration value without
//! caring about wire formats:
//! - `qwen` and `openai`: OpenAI-compatible chat completions
//! - `claude`: Anthropic messages API
//! - `gemini`: Google Generative Language API

use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::config::ResolvedProvider;
use crate::errors::ProviderError;

pub mod anthropic;
pub mod gemini;
pub mod openai;

/// Request timeout applied to every provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Default generation limit for providers that require one.
const MAX_TOKENS: u32 = 2048;

/// Built-in defaults for a known provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderDefaults {
    /// Provider name as used in configuration (e.g., "qwen").
    pub name: &'static str,
    /// Default API endpoint.
    pub endpoint: &'static str,
    /// Default model.
    pub model: &'static str,
    /// Conventional environment variable holding the API key.
    pub api_key_env: &'static str,
}

/// All providers this build knows how to talk to.
pub const KNOWN_PROVIDERS: &[ProviderDefaults] = &[
    ProviderDefaults {
        name: "qwen",
        endpoint: "https://dashscope.aliyuncs.com/compatible-mode/v1",
        model: "qwen3-max",
        api_key_env: "DASHSCOPE_API_KEY",
    },
    ProviderDefaults {
        name: "claude",
        endpoint: "https://api.anthropic.com",
        model: "claude-3-5-sonnet-latest",
        api_key_env: "ANTHROPIC_API_KEY",
    },
    ProviderDefaults {
        name: "gemini",
        endpoint: "https://generativelanguage.googleapis.com",
        model: "gemini-pro",
        api_key_env: "GEMINI_API_KEY",
    },
    ProviderDefaults {
        name: "openai",
        endpoint: "https://api.openai.com/v1",
        model: "gpt-4o-mini",
        api_key_env: "OPENAI_API_KEY",
    },
];

/// Look up the built-in defaults for a provider name.
pub fn defaults_for(name: &str) -> Option<&'static ProviderDefaults> {
    KNOWN_PROVIDERS.iter().find(|p| p.name == name)
}

/// A single model invocation.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt guiding the model.
    pub system: String,
    /// User content to act on.
    pub user: String,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Common interface for all LLM providers.
///
/// Implementations differ only in wire format; callers hold a
/// `Box<dyn Provider>` and never branch on the backend.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name as used in configuration.
    fn name(&self) -> &str;

    /// Send the request and return the model's text output.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}

/// Build the client for a resolved provider configuration.
pub fn create_provider(resolved: &ResolvedProvider) -> Result<Box<dyn Provider>> {
    match resolved.name.as_str() {
        "qwen" | "openai" => Ok(Box::new(openai::OpenAiCompatible::new(
            resolved.name.clone(),
            resolved.endpoint.clone(),
            resolved.api_key.clone(),
            resolved.model.clone(),
        ))),
        "claude" => Ok(Box::new(anthropic::Anthropic::new(
            resolved.endpoint.clone(),
            resolved.api_key.clone(),
            resolved.model.clone(),
        ))),
        "gemini" => Ok(Box::new(gemini::Gemini::new(
            resolved.endpoint.clone(),
            resolved.api_key.clone(),
            resolved.model.clone(),
        ))),
        other => bail!(
            "Unsupported provider: '{other}'\n\n\
             Known providers: {}",
            KNOWN_PROVIDERS
                .iter()
                .map(|p| p.name)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Shared HTTP client construction with the standard timeout.
fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn resolved(name: &str) -> ResolvedProvider {
        ResolvedProvider {
            name: name.to_string(),
            endpoint: "http://localhost:9999".to_string(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        }
    }

    #[test]
    fn test_create_provider_known_names() {
        for defaults in KNOWN_PROVIDERS {
            let provider = create_provider(&resolved(defaults.name)).unwrap();
            assert_eq!(provider.name(), defaults.name);
        }
    }

    #[test]
    fn test_create_provider_unknown_name() {
        let result = create_provider(&resolved("llamacpp"));
        let err = result.err().unwrap().to_string();
        assert!(err.contains("Unsupported provider"));
        assert!(err.contains("qwen"));
    }

    #[test]
    fn test_defaults_for() {
        assert_eq!(defaults_for("qwen").unwrap().model, "qwen3-max");
        assert!(defaults_for("nonexistent").is_none());
    }
}
