//! Configuration loading for the caro API server.
//!
//! A configuration struct declares its fields once via [`ConfigShape`];
//! [`ConfigLoader`] fills it from a JSON file and then overlays process
//! environment variables, which always win. Environment lookups use each
//! field's bare tag regardless of nesting depth.

mod loader;
pub mod shape;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, apply_env, env_var_or_none};
pub use shape::{ConfigShape, EXCLUSION_MARKER, Field, FieldValue};
pub use types::{OAuthConfig, RethinkConfig, ServerConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
