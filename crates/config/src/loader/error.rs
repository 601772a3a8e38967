//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Distinguish recoverable file problems from shape violations.
//!
//! Does NOT handle:
//! - Emitting diagnostics (the loader logs via `tracing` before returning).
//!
//! Invariants:
//! - All variants include context for debugging (paths, tags, sources).
//! - `UnsupportedField` is the only variant reporting a defect in the
//!   shape declaration rather than bad input; `is_shape_violation`
//!   exposes the distinction so embedders can escalate it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to resolve config path {path}: {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document parsed, but its root is not a JSON object.
    #[error("Config file at {path} must contain a JSON object")]
    NotAnObject { path: PathBuf },

    /// A present key holds the wrong JSON type for its declared field.
    #[error("Invalid value for {tag} in {path}: expected {expected}")]
    InvalidValue {
        path: PathBuf,
        tag: String,
        expected: &'static str,
    },

    /// A non-excluded field is neither text nor a nested group.
    ///
    /// Only a change to the shape declaration can fix this; callers
    /// normally treat it as fatal.
    #[error("Config field {tag} must be text or a nested group, found {type_name}")]
    UnsupportedField { tag: String, type_name: String },
}

impl ConfigError {
    /// True when the error reports an unsupported shape declaration
    /// rather than a problem with the file or environment.
    pub fn is_shape_violation(&self) -> bool {
        matches!(self, ConfigError::UnsupportedField { .. })
    }
}
