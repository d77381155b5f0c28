//! # lingo - Multi-provider AI Translation CLI
//!
//! `lingo` is a command-line tool for translating text through large
//! language model providers, with structure-preserving batch translation
//! of i18n JSON documents.
//!
//! ## Features
//!
//! - **Multiple providers**: Qwen, Claude, Gemini, and OpenAI behind one
//!   uniform interface, selected by a config value or CLI flag
//! - **i18n generation**: Translate every string value of a nested JSON
//!   document into several languages at once, preserving document shape
//! - **Caching**: Avoid redundant API calls with SQLite-based caching
//! - **Context-aware translation**: Optional context disambiguates short
//!   or ambiguous text
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a config file and fill in your API keys
//! lingo init
//!
//! # Translate a string
//! lingo translate "Hello, world!" --to zh
//!
//! # Translate with disambiguating context
//! lingo translate "bug" --to zh --context "software development"
//!
//! # Generate Chinese and Spanish versions of an i18n document
//! lingo i18n ./locales/en.json --languages zh,es --output-dir ./locales
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/lingo/config.toml`:
//!
//! ```toml
//! [lingo]
//! default_provider = "qwen"
//!
//! [providers.qwen]
//! endpoint = "https://dashscope.aliyuncs.com/compatible-mode/v1"
//! api_key_env = "DASHSCOPE_API_KEY"
//! model = "qwen3-max"
//! ```

/// Translation cache management using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Error types for the provider boundary.
pub mod errors;

/// File system utilities.
pub mod fs;

/// Structure-preserving i18n file generation.
pub mod i18n;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Provider clients for the supported LLM backends.
pub mod providers;

/// Translation capability built on top of the provider clients.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
