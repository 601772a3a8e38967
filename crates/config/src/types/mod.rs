//! Configuration type definitions for the caro API server.
//!
//! Responsibilities:
//! - Define the concrete configuration shape the service loads at startup.
//! - Declare each type's field list via `ConfigShape`.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - The field-list abstraction itself (see `shape` module at crate root).
//!
//! Invariants:
//! - Field tags double as config-file keys and environment variable names.
//! - Secrets never appear in `Debug` output (`OAuthConfig` redacts).

mod oauth;
mod rethink;
mod server;

pub use oauth::OAuthConfig;
pub use rethink::RethinkConfig;
pub use server::ServerConfig;
