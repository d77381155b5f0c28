//! Init command handler: writes the default configuration skeleton.

use anyhow::{Result, bail};
use inquire::Select;
use std::io::IsTerminal;

use crate::config::{ConfigManager, default_config};
use crate::providers::{KNOWN_PROVIDERS, defaults_for};
use crate::ui::{Style, handle_prompt_cancellation};

pub struct InitOptions {
    pub force: bool,
    pub default_provider: Option<String>,
}

/// Runs the init command.
///
/// Writes a config skeleton covering every known provider, with
/// placeholder API keys to fill in. Refuses to overwrite an existing
/// config unless `--force` is given.
pub fn run_init(options: InitOptions) -> Result<()> {
    handle_prompt_cancellation(|| run_init_inner(&options))
}

fn run_init_inner(options: &InitOptions) -> Result<()> {
    let manager = ConfigManager::new();

    if manager.config_path().exists() && !options.force {
        bail!(
            "Config file already exists: {}\n\n\
             Use --force to overwrite it",
            manager.config_path().display()
        );
    }

    let default_provider = match &options.default_provider {
        Some(name) => {
            if defaults_for(name).is_none() {
                bail!(
                    "Unknown provider: '{name}'\n\n\
                     Known providers: {}",
                    KNOWN_PROVIDERS
                        .iter()
                        .map(|p| p.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            name.clone()
        }
        None => select_default_provider()?,
    };

    let config = default_config(&default_provider);
    manager.save(&config)?;

    println!(
        "{} Config file created: {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!(
        "  {} {}",
        Style::label("default provider:"),
        Style::value(&default_provider)
    );
    println!();
    println!("{}", Style::header("Next steps"));
    println!(
        "  {}",
        Style::hint("Edit the config file and fill in your API keys, or export them:")
    );
    for defaults in KNOWN_PROVIDERS {
        println!(
            "    {:10} {}",
            Style::value(defaults.name),
            Style::secondary(format!("export {}=...", defaults.api_key_env))
        );
    }

    Ok(())
}

/// Picks the default provider: interactively on a terminal, otherwise the
/// first known provider.
fn select_default_provider() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        return Ok(KNOWN_PROVIDERS[0].name.to_string());
    }

    let names: Vec<&str> = KNOWN_PROVIDERS.iter().map(|p| p.name).collect();
    let selection = Select::new("Default provider:", names).prompt()?;

    Ok(selection.to_string())
}
