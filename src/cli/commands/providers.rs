//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigManager, ProviderConfig};
use crate::providers::KNOWN_PROVIDERS;
use crate::ui::Style;

/// Prints the known providers with their configuration status.
///
/// Listing order is the built-in provider table, not config-file order,
/// so output is deterministic.
pub fn print_providers() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    let default_provider = config.lingo.default_provider.as_deref();

    println!("{}", Style::header("Known providers"));
    println!();

    for defaults in KNOWN_PROVIDERS {
        let provider_config = config.providers.get(defaults.name);

        let has_key = provider_config.is_some_and(ProviderConfig::is_configured)
            || std::env::var(defaults.api_key_env).is_ok_and(|key| !key.is_empty());

        let is_default = default_provider == Some(defaults.name);
        println!(
            "  {}{}",
            Style::value(defaults.name),
            if is_default {
                Style::secondary(" (default)")
            } else {
                String::new()
            }
        );

        let endpoint = provider_config
            .and_then(|p| p.endpoint.as_deref())
            .unwrap_or(defaults.endpoint);
        let model = provider_config
            .and_then(|p| p.model.as_deref())
            .unwrap_or(defaults.model);

        println!("    {} {endpoint}", Style::label("endpoint:"));
        println!("    {} {model}", Style::label("model:"));
        println!(
            "    {} {}",
            Style::label("api key:"),
            if has_key {
                Style::success("(set)")
            } else {
                Style::secondary("(not set)")
            }
        );
    }

    if config.providers.is_empty() {
        println!();
        println!(
            "{}",
            Style::hint("No config file found. Run 'lingo init' to create one.")
        );
    }

    Ok(())
}
