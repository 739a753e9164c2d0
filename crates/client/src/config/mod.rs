//! Configuration loading and management
//!
//! Construction-time settings for the client: the two hosts, the two token
//! issuers, and one credential pair per auth domain. Every field is
//! required; there are no defaults.

pub mod loader;

use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, probe_config_paths};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is absent or blank.
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    /// A host or issuer setting is not a parseable URL.
    #[error("invalid URL for {field}: {cause}")]
    InvalidUrl {
        /// Name of the offending setting.
        field: &'static str,
        /// Parser diagnostic.
        cause: String,
    },

    /// Anything else: unreadable file, unsupported format, bad value.
    #[error("configuration error: {0}")]
    Invalid(String),
}

/// Connection settings for the delivery platform.
///
/// Two host groups (business API, label API) and two OAuth2 issuers with
/// their own client id/secret/audience triples.
#[derive(Clone, Deserialize)]
pub struct PaackConfig {
    /// Business API host, e.g. `https://api.paack.app`.
    pub api_host: String,
    /// Label API host.
    pub label_host: String,
    /// Token issuer for order operations.
    pub order_token_endpoint: String,
    /// Token issuer for label operations.
    pub label_token_endpoint: String,
    pub order_client_id: String,
    pub order_client_secret: String,
    pub order_audience: String,
    pub label_client_id: String,
    pub label_client_secret: String,
    pub label_audience: String,
}

impl fmt::Debug for PaackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaackConfig")
            .field("api_host", &self.api_host)
            .field("label_host", &self.label_host)
            .field("order_token_endpoint", &self.order_token_endpoint)
            .field("label_token_endpoint", &self.label_token_endpoint)
            .field("order_client_id", &self.order_client_id)
            .field("order_client_secret", &"<redacted>")
            .field("order_audience", &self.order_audience)
            .field("label_client_id", &self.label_client_id)
            .field("label_client_secret", &"<redacted>")
            .field("label_audience", &self.label_audience)
            .finish()
    }
}

impl PaackConfig {
    /// Check that every setting is present and the hosts parse as URLs.
    ///
    /// # Errors
    /// [`ConfigError::Missing`] for blank fields, [`ConfigError::InvalidUrl`]
    /// for malformed hosts or issuers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required: [(&'static str, &str); 10] = [
            ("api_host", &self.api_host),
            ("label_host", &self.label_host),
            ("order_token_endpoint", &self.order_token_endpoint),
            ("label_token_endpoint", &self.label_token_endpoint),
            ("order_client_id", &self.order_client_id),
            ("order_client_secret", &self.order_client_secret),
            ("order_audience", &self.order_audience),
            ("label_client_id", &self.label_client_id),
            ("label_client_secret", &self.label_client_secret),
            ("label_audience", &self.label_audience),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(name));
            }
        }

        let urls: [(&'static str, &str); 4] = [
            ("api_host", &self.api_host),
            ("label_host", &self.label_host),
            ("order_token_endpoint", &self.order_token_endpoint),
            ("label_token_endpoint", &self.label_token_endpoint),
        ];

        for (name, value) in urls {
            Url::parse(value)
                .map_err(|err| ConfigError::InvalidUrl { field: name, cause: err.to_string() })?;
        }

        Ok(())
    }
}
