//! Client configuration
//!
//! The client is configured by two values: the LibreNMS host and an API token.
//! They can be given directly or read from `LIBRENMS_URL` / `LIBRENMS_TOKEN`.

use crate::error::LibreNmsError;
use std::env;
use std::fmt;

/// Environment variable holding the LibreNMS host or URL
pub const URL_ENV: &str = "LIBRENMS_URL";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "LIBRENMS_TOKEN";

/// Host used when `LIBRENMS_URL` is not set
pub const DEFAULT_URL: &str = "http://localhost";

/// Connection settings for a LibreNMS instance
#[derive(Clone, PartialEq, Eq)]
pub struct LibreNmsConfig {
    /// Host name or URL, with or without scheme (e.g., "librenms.lan" or "https://nms.example.net")
    pub host: String,
    /// API token sent as `X-Auth-Token`
    pub token: String,
}

impl LibreNmsConfig {
    /// Create a configuration from explicit values
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// `LIBRENMS_URL` defaults to `http://localhost`; `LIBRENMS_TOKEN` is required.
    pub fn from_env() -> Result<Self, LibreNmsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LibreNmsError> {
        let host = lookup(URL_ENV).unwrap_or_else(|| DEFAULT_URL.to_string());
        let token = lookup(TOKEN_ENV).ok_or_else(|| {
            LibreNmsError::InvalidRequest(format!("{TOKEN_ENV} environment variable is required"))
        })?;

        Ok(Self::new(host, token))
    }
}

impl fmt::Debug for LibreNmsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibreNmsConfig")
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .finish()
    }
}
