//! i18n generation command handler.

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::config::ConfigManager;
use crate::i18n::{GenerationRequest, OutputFormat, generate};
use crate::status;
use crate::translation::Translator;
use crate::ui::Style;

pub struct I18nOptions {
    pub input: String,
    pub output_dir: String,
    pub languages: Vec<String>,
    pub format: String,
    pub provider: Option<String>,
    pub cache: bool,
}

/// Generates translated i18n files for every requested language.
pub async fn run_i18n(options: I18nOptions) -> Result<()> {
    let format: OutputFormat = options.format.parse()?;

    let manager = ConfigManager::new();
    let config = manager.load()?;
    let translator = Translator::from_config(options.provider.as_deref(), &config)?;

    status!(
        "Using provider: {}",
        Style::value(translator.provider_name())
    );

    let request = GenerationRequest {
        input_file: PathBuf::from(options.input),
        output_dir: PathBuf::from(options.output_dir),
        languages: options.languages,
        format,
        use_cache: options.cache,
    };

    let report = generate(&request, &translator).await?;

    if !report.is_success() {
        let failed: Vec<&str> = report
            .failures
            .iter()
            .map(|failure| failure.language.as_str())
            .collect();
        bail!("Generation failed for language(s): {}", failed.join(", "));
    }

    Ok(())
}
