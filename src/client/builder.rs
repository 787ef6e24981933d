use crate::client::core::B2bClient;
use crate::credentials::{ApiKeyCredential, API_KEY_ENV};
use crate::request::API_BASE_URL;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::sync::Arc;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct B2bClientBuilder {
    api_key: Option<String>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
    continue_on_fail: bool,
}

impl B2bClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url_override: None,
            continue_on_fail: false,
        }
    }

    /// Set the API key explicitly. When omitted, the key is resolved from
    /// the OS keyring and then the `DATAFORB2B_API_KEY` environment
    /// variable.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the fixed API base URL.
    ///
    /// This is primarily for testing with mock servers. In production the
    /// default base URL is the right choice.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Capture per-item batch errors into the output stream instead of
    /// aborting on the first failure.
    pub fn continue_on_fail(mut self, enable: bool) -> Self {
        self.continue_on_fail = enable;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<B2bClient> {
        let credential = match self.api_key {
            Some(key) => ApiKeyCredential::new(key),
            None => ApiKeyCredential::resolve().ok_or_else(|| {
                Error::configuration(format!(
                    "no API key: pass one with with_api_key, store one in the keyring, or set {}",
                    API_KEY_ENV
                ))
            })?,
        };

        let base_url = match self.base_url_override {
            Some(base) => {
                url::Url::parse(&base)
                    .map_err(|e| Error::configuration(format!("invalid base URL '{}': {}", base, e)))?;
                base
            }
            None => API_BASE_URL.to_string(),
        };

        let transport = Arc::new(HttpTransport::with_base_url(credential, base_url)?);

        Ok(B2bClient {
            transport,
            continue_on_fail: self.continue_on_fail,
        })
    }
}

impl Default for B2bClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        // Explicit empty builder with no ambient key resolution expected in CI
        if std::env::var(API_KEY_ENV).is_ok() {
            return;
        }
        let err = B2bClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let err = B2bClientBuilder::new()
            .with_api_key("key")
            .base_url_override("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
