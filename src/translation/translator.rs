use anyhow::{Context, Result};
use async_trait::async_trait;

use super::language::language_name;
use super::prompt::build_system_prompt;
use crate::config::{ConfigFile, resolve_provider};
use crate::providers::{CompletionRequest, Provider, create_provider};

/// Sampling temperature used when the caller does not specify one.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Optional knobs for a single translation call.
#[derive(Debug, Clone, Default)]
pub struct TranslationOptions {
    /// Disambiguating context injected into the system prompt.
    /// Used by the single-string path only; bulk i18n generation never
    /// sets it.
    pub context: Option<String>,
    /// Sampling temperature override.
    pub temperature: Option<f32>,
}

/// The translation capability consumed by the CLI and the i18n pipeline.
///
/// Tests inject a deterministic stub implementation; production code uses
/// [`Translator`].
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate `text` into the language identified by `target_lang`
    /// (ISO 639-1 code).
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        options: &TranslationOptions,
    ) -> Result<String>;
}

/// Provider-backed translator.
pub struct Translator {
    provider: Box<dyn Provider>,
}

impl Translator {
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Build a translator from the config file, honoring a CLI provider
    /// override.
    pub fn from_config(override_name: Option<&str>, config: &ConfigFile) -> Result<Self> {
        let resolved = resolve_provider(override_name, config)?;
        let provider = create_provider(&resolved)?;
        Ok(Self::new(provider))
    }

    /// Name of the provider answering translation calls.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

#[async_trait]
impl Translate for Translator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        options: &TranslationOptions,
    ) -> Result<String> {
        // Prompt with the full language name; fall back to the raw code
        // for anything outside the table.
        let language = language_name(target_lang).unwrap_or(target_lang);
        let request = CompletionRequest {
            system: build_system_prompt(language, options.context.as_deref()),
            user: text.to_string(),
            temperature: options.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        };

        self.provider.complete(&request).await.with_context(|| {
            format!(
                "Translation to '{target_lang}' via provider '{}' failed",
                self.provider.name()
            )
        })
    }
}
