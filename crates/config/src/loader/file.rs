//! Config file loading.
//!
//! Responsibilities:
//! - Resolve the config path, read the file, and parse it as JSON.
//! - Fill a shape's declared fields from the parsed document, in place.
//!
//! Does NOT handle:
//! - Environment variable overrides (see env.rs).
//! - Rejecting unsupported field declarations (the environment phase
//!   owns that, so the rejection fires on every load).
//!
//! Invariants:
//! - Keys absent from the document leave the field's current value alone.
//! - Unknown document keys are ignored.
//! - Excluded fields are never filled, even when a matching key exists.
//! - All failures are returned as `ConfigError`; nothing panics.

use std::path::Path;

use serde_json::{Map, Value};

use super::error::ConfigError;
use crate::shape::{ConfigShape, Field, FieldValue};

/// Loads `path` as a JSON document and fills `shape` from it.
pub(crate) fn load_file(path: &Path, shape: &mut dyn ConfigShape) -> Result<(), ConfigError> {
    let abs = std::path::absolute(path).map_err(|source| ConfigError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %abs.display(), "Loading config file");

    let content = std::fs::read_to_string(&abs).map_err(|source| ConfigError::Read {
        path: abs.clone(),
        source,
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: abs.clone(),
        source,
    })?;

    let Value::Object(entries) = document else {
        return Err(ConfigError::NotAnObject { path: abs });
    };

    apply_document(shape, &entries, &abs)
}

/// Fills each declared field present in `entries`, recursing into groups.
fn apply_document(
    shape: &mut dyn ConfigShape,
    entries: &Map<String, Value>,
    path: &Path,
) -> Result<(), ConfigError> {
    for field in shape.fields() {
        if field.is_excluded() {
            continue;
        }
        let Field { tag, value } = field;
        let Some(entry) = entries.get(tag) else {
            continue;
        };
        match value {
            FieldValue::Text(slot) => match entry {
                Value::String(text) => *slot = text.clone(),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        path: path.to_path_buf(),
                        tag: tag.to_string(),
                        expected: "a string",
                    });
                }
            },
            FieldValue::Group(inner) => match entry {
                Value::Object(nested) => apply_document(inner, nested, path)?,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        path: path.to_path_buf(),
                        tag: tag.to_string(),
                        expected: "an object",
                    });
                }
            },
            FieldValue::Unsupported { .. } => {}
        }
    }
    Ok(())
}
