//! Top-level service configuration.
//!
//! Responsibilities:
//! - Combine the per-area configuration groups into the value the server
//!   boots from.
//!
//! Invariants:
//! - Populated once at startup by the loader, read-only afterwards.

use crate::shape::{ConfigShape, Field};
use crate::types::{OAuthConfig, RethinkConfig};

/// Complete configuration for the caro API server.
///
/// Filled by [`ConfigLoader`](crate::ConfigLoader) before the server
/// starts; every later consumer treats it as read-only.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// RethinkDB connection settings.
    pub rethink: RethinkConfig,
    /// Facebook OAuth settings.
    pub oauth: OAuthConfig,
}

impl ConfigShape for ServerConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::group("rethink", &mut self.rethink),
            Field::group("oauth", &mut self.oauth),
        ]
    }
}
