//! Subcommand implementations.

/// i18n generation command handler.
pub mod i18n;

/// Config initialization command handler.
pub mod init;

/// Provider listing command handler.
pub mod providers;

/// Translation command handler.
pub mod translate;

/// Config validation command handler.
pub mod validate;
