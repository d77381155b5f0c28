//! Leaf extraction and structure rebuilding for JSON-like documents.
//!
//! The document model is `serde_json::Value` built with the
//! `preserve_order` feature, so mapping keys keep their insertion order
//! from the source file through to the rebuilt output.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// One step in a leaf's address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Mapping key.
    Key(String),
    /// Sequence index.
    Index(usize),
}

/// Address of a node in the document tree, from the root down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath(Vec<PathStep>);

impl KeyPath {
    /// The path extended by a mapping key.
    fn child_key(&self, key: &str) -> Self {
        let mut steps = self.0.clone();
        steps.push(PathStep::Key(key.to_string()));
        Self(steps)
    }

    /// The path extended by a sequence index.
    fn child_index(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(PathStep::Index(index));
        Self(steps)
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    /// Renders as `app.messages[0]` for error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{key}")?;
                }
                PathStep::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Whether a string leaf should be sent through translation.
///
/// Empty and whitespace-only strings carry nothing to translate and pass
/// through unchanged.
fn is_translatable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Collects every translatable string leaf, depth-first.
///
/// Mapping keys are visited in their original insertion order and
/// sequence elements in index order, so the result is deterministic for
/// a given document. Non-string leaves are not emitted.
pub fn extract(document: &Value) -> Vec<(KeyPath, String)> {
    let mut leaves = Vec::new();
    collect(document, &KeyPath::default(), &mut leaves);
    leaves
}

fn collect(value: &Value, path: &KeyPath, leaves: &mut Vec<(KeyPath, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect(child, &path.child_key(key), leaves);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect(child, &path.child_index(index), leaves);
            }
        }
        Value::String(text) if is_translatable(text) => {
            leaves.push((path.clone(), text.clone()));
        }
        _ => {}
    }
}

/// Builds a copy of `original` with each addressed string leaf replaced
/// by its translation.
///
/// The shape of the result is identical to the original: same keys in
/// the same order, same nesting, same sequence lengths, same non-string
/// leaves. Paths absent from `translations` keep their original value.
/// The original is never mutated.
pub fn rebuild(original: &Value, translations: &HashMap<KeyPath, String>) -> Value {
    rebuild_at(original, &KeyPath::default(), translations)
}

fn rebuild_at(value: &Value, path: &KeyPath, translations: &HashMap<KeyPath, String>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| {
                    (
                        key.clone(),
                        rebuild_at(child, &path.child_key(key), translations),
                    )
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, child)| rebuild_at(child, &path.child_index(index), translations))
                .collect(),
        ),
        Value::String(_) => translations
            .get(path)
            .map_or_else(|| value.clone(), |translated| Value::String(translated.clone())),
        _ => value.clone(),
    }
}
