//! Validate command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::ui::Style;

/// Loads and parses the config file, reporting what it found.
///
/// Fails with a descriptive error if the file is missing or malformed.
pub fn run_validate() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load()?;

    println!(
        "{} Config file is valid: {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    println!(
        "  {} {}",
        Style::label("default provider:"),
        config
            .lingo
            .default_provider
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );

    let configured: Vec<&str> = config
        .providers
        .iter()
        .filter(|(_, provider)| provider.is_configured())
        .map(|(name, _)| name.as_str())
        .collect();

    if configured.is_empty() {
        println!(
            "  {}",
            Style::warning("no providers have an API key set yet")
        );
    } else {
        println!(
            "  {} {}",
            Style::label("providers with keys:"),
            Style::value(configured.join(", "))
        );
    }

    Ok(())
}
