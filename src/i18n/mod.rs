//! Structure-preserving i18n file generation.
//!
//! Walks a source JSON document, translates every string leaf into each
//! requested language, and writes one output document per language with
//! the exact same shape as the source.

mod document;
mod generator;
mod serializer;

pub use document::{KeyPath, PathStep, extract, rebuild};
pub use generator::{
    GenerationReport, GenerationRequest, LanguageFailure, LanguageOutput, generate,
};
pub use serializer::{OutputFormat, serialize};
