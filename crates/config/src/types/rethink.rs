//! RethinkDB connection settings.
//!
//! Responsibilities:
//! - Define the database section of the service configuration.
//! - Declare its field tags for the loader.
//!
//! Invariants:
//! - `addr` and `port` are kept as separate text fields; `address()` is
//!   the only place that joins them.

use crate::shape::{ConfigShape, Field};

/// Connection settings for the RethinkDB cluster backing the service.
#[derive(Debug, Clone, Default)]
pub struct RethinkConfig {
    /// Host or IP of the RethinkDB server, without the port.
    pub addr: String,
    /// Driver port, as text.
    pub port: String,
    /// Database name. File-only: no environment variable names it.
    pub db_name: String,
    /// Cluster authentication key. File-only.
    pub auth_key: String,
}

impl RethinkConfig {
    /// The `host:port` address the database driver dials.
    pub fn address(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

impl ConfigShape for RethinkConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::text("RETHINKDB_ADDR", &mut self.addr),
            Field::text("RETHINKDB_PORT", &mut self.port),
            Field::text("dbname", &mut self.db_name),
            Field::text("authkey", &mut self.auth_key),
        ]
    }
}
