//! Translation command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::status;
use crate::translation::{Translate, TranslationOptions, Translator, validate_language};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: String,
    pub to: String,
    pub provider: Option<String>,
    pub context: Option<String>,
    pub temperature: Option<f32>,
}

/// Translates a single piece of text and prints the result to stdout.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    validate_language(&options.to)?;

    let manager = ConfigManager::new();
    let config = manager.load()?;
    let translator = Translator::from_config(options.provider.as_deref(), &config)?;

    status!(
        "Using provider: {}",
        Style::value(translator.provider_name())
    );

    let translation_options = TranslationOptions {
        context: options.context,
        temperature: options.temperature,
    };

    let spinner = Spinner::new("Translating...");
    let result = translator
        .translate(&options.text, &options.to, &translation_options)
        .await;
    spinner.stop();

    println!("{}", result?);

    Ok(())
}
