//! API-key credential handling.
//!
//! A single secret authenticates every request, attached as the `api_key`
//! header. Storage and encryption are owned by the caller's environment;
//! this module only resolves a key (explicit value, OS keyring, then
//! environment variable) and describes the connectivity self-test.

use crate::request::{RequestDescriptor, REQUEST_TIMEOUT};
use keyring::Entry;
use serde_json::json;
use std::env;
use std::fmt;

/// Header carrying the API key on every outgoing request.
pub const API_KEY_HEADER: &str = "api_key";

/// Environment variable consulted when no explicit key is supplied.
pub const API_KEY_ENV: &str = "DATAFORB2B_API_KEY";

const KEYRING_SERVICE: &str = "dataforb2b";
const KEYRING_USER: &str = "api_key";

/// A resolved API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCredential {
    key: String,
}

impl ApiKeyCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Resolve a key from the environment: OS keyring first, then the
    /// `DATAFORB2B_API_KEY` environment variable.
    pub fn resolve() -> Option<Self> {
        if let Ok(entry) = Entry::new(KEYRING_SERVICE, KEYRING_USER) {
            if let Ok(key) = entry.get_password() {
                return Some(Self::new(key));
            }
        }

        env::var(API_KEY_ENV).ok().map(Self::new)
    }

    /// The secret value, for header injection.
    pub fn expose(&self) -> &str {
        &self.key
    }
}

// Keep the secret out of debug output and logs.
impl fmt::Debug for ApiKeyCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredential")
            .field("key", &"***")
            .finish()
    }
}

/// Fixed request used to verify a credential: a minimal text-to-filters
/// call. Success (any 2xx) means the key is accepted.
pub fn connectivity_probe() -> RequestDescriptor {
    RequestDescriptor {
        method: "POST".to_string(),
        endpoint: "/search/llm/filters".to_string(),
        body: json!({"query": "test", "category": "people"}),
        timeout: REQUEST_TIMEOUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let credential = ApiKeyCredential::new("super-secret");
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_connectivity_probe_shape() {
        let probe = connectivity_probe();
        assert_eq!(probe.method, "POST");
        assert_eq!(probe.endpoint, "/search/llm/filters");
        assert_eq!(probe.body, json!({"query": "test", "category": "people"}));
    }
}
