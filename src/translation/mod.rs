mod language;
mod prompt;
mod translator;

pub use language::{SUPPORTED_LANGUAGES, language_name, print_languages, validate_language};
pub use translator::{DEFAULT_TEMPERATURE, Translate, TranslationOptions, Translator};
