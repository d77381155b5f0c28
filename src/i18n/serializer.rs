//! Rendering documents to JSON or YAML text.

use anyhow::{Context, Result};
use serde_json::Value;
use std::str::FromStr;

/// Output file format for generated i18n documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// File extension used for output files.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => anyhow::bail!("Invalid output format: '{other}' (expected 'json' or 'yaml')"),
        }
    }
}

/// Renders a document with stable, human-readable formatting: 2-space
/// indentation, UTF-8 with non-ASCII characters left unescaped, key order
/// preserved, trailing newline.
pub fn serialize(document: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(document)
                .context("Failed to serialize document to JSON")?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(document).context("Failed to serialize document to YAML")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_serialize_json_keeps_unicode_unescaped() {
        let document = json!({"title": "你好世界"});

        let text = serialize(&document, OutputFormat::Json).unwrap();

        assert!(text.contains("你好世界"));
        assert!(!text.contains("\\u"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_serialize_json_is_indented() {
        let document = json!({"a": {"b": "c"}});

        let text = serialize(&document, OutputFormat::Json).unwrap();

        assert!(text.contains("  \"a\""));
        assert!(text.contains("    \"b\""));
    }

    #[test]
    fn test_serialize_json_preserves_key_order() {
        let document: Value =
            serde_json::from_str(r#"{"zebra":"z","alpha":"a","mike":"m"}"#).unwrap();

        let text = serialize(&document, OutputFormat::Json).unwrap();

        let zebra = text.find("zebra").unwrap();
        let alpha = text.find("alpha").unwrap();
        let mike = text.find("mike").unwrap();
        assert!(zebra < alpha && alpha < mike);
    }

    #[test]
    fn test_serialize_yaml() {
        let document = json!({"title": "你好", "nested": {"count": 3}});

        let text = serialize(&document, OutputFormat::Yaml).unwrap();

        assert!(text.contains("title: 你好"));
        assert!(text.contains("count: 3"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_serialize_empty_object() {
        assert_eq!(serialize(&json!({}), OutputFormat::Json).unwrap(), "{}\n");
    }
}
