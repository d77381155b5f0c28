//! The i18n generation pipeline.
//!
//! Pipeline per run: load source document → extract string leaves once →
//! for each target language, translate every leaf (cache-checked when
//! enabled) → rebuild an isomorphic document → serialize → atomic write.
//!
//! Failure policy: a failed leaf aborts its language before anything is
//! written (fail-fast, no partial files), but remaining languages still
//! run. Input errors abort the whole run before any output exists.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use super::document::{self, KeyPath};
use super::serializer::{self, OutputFormat};
use crate::cache::CacheManager;
use crate::fs::atomic_write;
use crate::status;
use crate::translation::{Translate, TranslationOptions, language_name, validate_language};
use crate::ui::Style;

/// Everything needed for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Source JSON document.
    pub input_file: PathBuf,
    /// Directory for generated files (created if absent).
    pub output_dir: PathBuf,
    /// Target language codes, in output order.
    pub languages: Vec<String>,
    /// Output file format.
    pub format: OutputFormat,
    /// Whether to consult and fill the on-disk translation cache.
    pub use_cache: bool,
}

/// A successfully generated language file.
#[derive(Debug)]
pub struct LanguageOutput {
    pub language: String,
    pub path: PathBuf,
    /// Number of leaves translated (including cache hits).
    pub translated: usize,
    /// How many of those came from the cache.
    pub cache_hits: usize,
}

/// A language whose generation was aborted.
#[derive(Debug)]
pub struct LanguageFailure {
    pub language: String,
    pub error: anyhow::Error,
}

/// Per-language results of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outputs: Vec<LanguageOutput>,
    pub failures: Vec<LanguageFailure>,
}

impl GenerationReport {
    /// `true` if every requested language produced a file.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Removes duplicate language codes, keeping the first occurrence.
fn dedup_languages(languages: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    languages
        .iter()
        .filter(|lang| seen.insert(lang.as_str()))
        .cloned()
        .collect()
}

/// Runs i18n generation for every requested language.
///
/// Languages are processed sequentially in request order and
/// independently: a failure in one never affects another, and its error
/// is reported in the returned [`GenerationReport`] rather than aborting
/// the run.
///
/// # Errors
///
/// Returns an error before any output is written if the language list is
/// empty or invalid, the input file is missing or malformed, the output
/// directory cannot be created, or the cache cannot be opened.
pub async fn generate(
    request: &GenerationRequest,
    capability: &dyn Translate,
) -> Result<GenerationReport> {
    let languages = dedup_languages(&request.languages);
    if languages.is_empty() {
        bail!("At least one target language is required");
    }
    for lang in &languages {
        validate_language(lang)?;
    }

    let content = fs::read_to_string(&request.input_file).with_context(|| {
        format!(
            "Failed to read input file: {}",
            request.input_file.display()
        )
    })?;
    let source: Value = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse JSON from: {}",
            request.input_file.display()
        )
    })?;

    fs::create_dir_all(&request.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            request.output_dir.display()
        )
    })?;

    let leaves = document::extract(&source);
    if leaves.is_empty() {
        status!(
            "{}",
            Style::warning("No translatable strings found in the source document")
        );
    }

    let cache = if request.use_cache {
        Some(CacheManager::new()?)
    } else {
        None
    };

    let stem = request
        .input_file
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let mut report = GenerationReport::default();
    for lang in &languages {
        let display_name = language_name(lang).unwrap_or(lang);
        status!(
            "Generating {} ({display_name})...",
            Style::value(lang)
        );

        match generate_language(&source, &leaves, lang, request, cache.as_ref(), capability, &stem)
            .await
        {
            Ok(output) => {
                status!(
                    "{} {} written ({} strings, {} from cache)",
                    Style::success("✓"),
                    output.path.display(),
                    output.translated,
                    output.cache_hits
                );
                report.outputs.push(output);
            }
            Err(error) => {
                crate::warn!(
                    "{} Generation for '{lang}' failed: {error:#}",
                    Style::error("✗")
                );
                report.failures.push(LanguageFailure {
                    language: lang.clone(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

/// Translates every leaf for one language and writes its output file.
///
/// The file only materializes after the full leaf set has translated, so
/// a failure part-way leaves no trace on disk.
async fn generate_language(
    source: &Value,
    leaves: &[(KeyPath, String)],
    lang: &str,
    request: &GenerationRequest,
    cache: Option<&CacheManager>,
    capability: &dyn Translate,
    stem: &str,
) -> Result<LanguageOutput> {
    let mut translations: HashMap<KeyPath, String> = HashMap::with_capacity(leaves.len());
    let mut cache_hits = 0;

    for (path, text) in leaves {
        let cached = match cache {
            Some(cache) => cache.get(text, lang)?,
            None => None,
        };

        let translated = if let Some(hit) = cached {
            cache_hits += 1;
            hit
        } else {
            let fresh = capability
                .translate(text, lang, &TranslationOptions::default())
                .await
                .with_context(|| format!("Failed to translate '{path}'"))?;
            if let Some(cache) = cache {
                cache.put(text, lang, &fresh)?;
            }
            fresh
        };

        translations.insert(path.clone(), translated);
    }

    let rebuilt = document::rebuild(source, &translations);
    let rendered = serializer::serialize(&rebuilt, request.format)?;

    let output_path = request
        .output_dir
        .join(format!("{stem}_{lang}.{}", request.format.extension()));
    atomic_write(&output_path, &rendered)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    Ok(LanguageOutput {
        language: lang.to_string(),
        path: output_path,
        translated: leaves.len(),
        cache_hits,
    })
}
