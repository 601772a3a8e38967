//! Environment variable overlay for configuration shapes.
//!
//! Responsibilities:
//! - Overwrite text leaves with non-empty environment variable values.
//! - Walk nested groups recursively.
//! - Reject shapes that declare unsupported field kinds.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//!
//! Invariants:
//! - Lookups use a field's own tag at every depth; names are never
//!   composed from enclosing groups. A nested leaf tagged `PORT` answers
//!   to the variable `PORT`, not `parent.PORT`.
//! - An empty variable counts as unset; whitespace is a real value.
//! - Excluded fields are never read, written, or validated.
//! - Substitution logs name the variable, never its value.

use super::error::ConfigError;
use crate::shape::{ConfigShape, Field, FieldValue};

/// Read an environment variable, returning None if unset or empty.
///
/// The value is not trimmed: a whitespace-only variable is applied as-is.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Apply environment overrides to every non-excluded field of `shape`.
///
/// `group` is the tag of the enclosing group, empty at the root. It feeds
/// diagnostics only and never becomes part of a variable name, so nested
/// leaves share one flat namespace with top-level ones.
///
/// The only failure is [`ConfigError::UnsupportedField`], returned for a
/// non-excluded field that is neither text nor a group. It fires whether
/// or not a matching variable is set; fields declared before it keep any
/// overrides already applied.
pub fn apply_env(shape: &mut dyn ConfigShape, group: &str) -> Result<(), ConfigError> {
    for field in shape.fields() {
        if field.is_excluded() {
            continue;
        }
        let Field { tag, value } = field;
        match value {
            FieldValue::Text(slot) => {
                if let Some(text) = env_var_or_none(tag) {
                    tracing::info!(tag, "Applying environment override");
                    *slot = text;
                }
            }
            FieldValue::Group(inner) => {
                tracing::debug!(group = tag, "Descending into nested config group");
                apply_env(inner, tag)?;
            }
            FieldValue::Unsupported { type_name } => {
                tracing::error!(
                    tag,
                    group,
                    type_name,
                    "Config field must be text or a nested group"
                );
                return Err(ConfigError::UnsupportedField {
                    tag: tag.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }
    }
    Ok(())
}
