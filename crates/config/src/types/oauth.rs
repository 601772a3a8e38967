//! Facebook OAuth application settings.
//!
//! Responsibilities:
//! - Define the OAuth section of the service configuration.
//! - Declare its field tags for the loader.
//!
//! Invariants:
//! - `app_secret` never appears in `Debug` output; the hand-written impl
//!   redacts it.

use std::fmt;

use crate::shape::{ConfigShape, Field};

/// Credentials and callback for the Facebook login flow.
#[derive(Clone, Default)]
pub struct OAuthConfig {
    /// Application identifier issued by Facebook.
    pub app_id: String,
    /// Application secret.
    pub app_secret: String,
    /// Absolute URL Facebook redirects to after login.
    pub callback_url: String,
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

impl ConfigShape for OAuthConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::text("FACEBOOK_APP_ID", &mut self.app_id),
            Field::text("FACEBOOK_APP_SECRET", &mut self.app_secret),
            Field::text("FACEBOOK_CALLBACK_URL", &mut self.callback_url),
        ]
    }
}
