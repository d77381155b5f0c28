use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::providers::{KNOWN_PROVIDERS, defaults_for};

/// Default settings in the `[lingo]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LingoConfig {
    /// Provider used when none is given on the command line.
    pub default_provider: Option<String>,
}

/// Configuration for a single provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API endpoint URL (falls back to the provider's built-in default).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Model to request (falls back to the provider's built-in default).
    #[serde(default)]
    pub model: Option<String>,
}

/// Placeholder keys written by `lingo init` count as unset.
fn is_placeholder(key: &str) -> bool {
    key.starts_with("your_") && key.ends_with("_here")
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    ///
    /// Returns `None` if neither source yields a real key.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key
            .clone()
            .filter(|key| !key.is_empty() && !is_placeholder(key))
    }

    /// Returns `true` if this provider has a usable API key.
    pub fn is_configured(&self) -> bool {
        self.get_api_key().is_some()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lingo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub lingo: LingoConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// A provider choice with endpoint, key, and model fully resolved.
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    /// The selected provider name.
    pub name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The API key.
    pub api_key: String,
    /// The model to request.
    pub model: String,
}

/// Resolves the provider to use, merging the CLI override with the config
/// file. The CLI value takes precedence over `default_provider`.
///
/// # Errors
///
/// Returns an error if no provider is selected anywhere, the name is not a
/// known provider, the provider has no config section, or no API key can
/// be found for it.
pub fn resolve_provider(
    override_name: Option<&str>,
    config_file: &ConfigFile,
) -> Result<ResolvedProvider> {
    let name = override_name
        .map(ToString::to_string)
        .or_else(|| config_file.lingo.default_provider.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'default_provider'\n\n\
                 Please provide it via:\n  \
                 - CLI option: lingo translate --provider <name> ...\n  \
                 - Config file: run 'lingo init' to create one"
            )
        })?;

    let Some(defaults) = defaults_for(&name) else {
        bail!(
            "Unknown provider: '{name}'\n\n\
             Known providers: {}",
            KNOWN_PROVIDERS
                .iter()
                .map(|p| p.name)
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    let provider_config = config_file.providers.get(&name).ok_or_else(|| {
        anyhow::anyhow!(
            "Provider '{name}' is not configured\n\n\
             Run 'lingo init' to create a config file, then fill in the\n\
             [providers.{name}] section"
        )
    })?;

    // Config key (env var or file) wins; the provider's conventional
    // environment variable is the last resort.
    let api_key = provider_config
        .get_api_key()
        .or_else(|| {
            std::env::var(defaults.api_key_env)
                .ok()
                .filter(|key| !key.is_empty())
        })
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Provider '{name}' requires an API key\n\n\
                 Set the {env} environment variable:\n  \
                 export {env}=\"your-api-key\"\n\n\
                 Or set api_key in the [providers.{name}] section of the config file",
                env = defaults.api_key_env
            )
        })?;

    Ok(ResolvedProvider {
        endpoint: provider_config
            .endpoint
            .clone()
            .unwrap_or_else(|| defaults.endpoint.to_string()),
        model: provider_config
            .model
            .clone()
            .unwrap_or_else(|| defaults.model.to_string()),
        api_key,
        name,
    })
}

/// Builds the config skeleton written by `lingo init`: every known
/// provider with its default endpoint, model, and a placeholder API key.
pub fn default_config(default_provider: &str) -> ConfigFile {
    let providers = KNOWN_PROVIDERS
        .iter()
        .map(|defaults| {
            (
                defaults.name.to_string(),
                ProviderConfig {
                    endpoint: Some(defaults.endpoint.to_string()),
                    api_key: Some(format!("your_{}_api_key_here", defaults.name)),
                    api_key_env: Some(defaults.api_key_env.to_string()),
                    model: Some(defaults.model.to_string()),
                },
            )
        })
        .collect();

    ConfigFile {
        lingo: LingoConfig {
            default_provider: Some(default_provider.to_string()),
        },
        providers,
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/lingo/config.toml`
    /// or `~/.config/lingo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!(
                "Failed to read config file: {}\n\
                 Run 'lingo init' to create one",
                self.config_path.display()
            )
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
