//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, LingoConfig, ProviderConfig, ResolvedProvider, default_config,
    resolve_provider,
};
