//! Configuration loading from a JSON file with environment overrides.
//!
//! Responsibilities:
//! - Load a JSON config file into a `ConfigShape` in place (file phase).
//! - Overlay process environment variables on top (environment phase).
//! - Expose the phases separately and combined via `ConfigLoader`.
//!
//! Does NOT handle:
//! - Declaring shapes or tags (see `shape` and `types` modules).
//! - Installing a `tracing` subscriber (the embedding process does).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - The phases run once, in order, with no retry; a failed load leaves
//!   the shape partially updated and the caller must discard it.
//! - Environment lookups use bare field tags at every nesting depth.

mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use env::{apply_env, env_var_or_none};
pub use error::ConfigError;

use std::path::{Path, PathBuf};

use crate::shape::ConfigShape;

/// Loads a configuration shape from a JSON file, then from the process
/// environment.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for the config file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The config file path this loader reads, as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the file phase only.
    pub fn load_file(&self, shape: &mut dyn ConfigShape) -> Result<(), ConfigError> {
        file::load_file(&self.path, shape)
    }

    /// Loads the file, then applies environment overrides.
    ///
    /// A file-phase failure propagates immediately and the environment
    /// phase does not run. On any error the shape may be partially
    /// updated and must not be used.
    pub fn load(&self, shape: &mut dyn ConfigShape) -> Result<(), ConfigError> {
        file::load_file(&self.path, shape)?;
        env::apply_env(shape, "")
    }
}
