use crate::credentials::{ApiKeyCredential, API_KEY_HEADER};
use crate::request::{RequestDescriptor, API_BASE_URL};
use crate::{Error, Result};
use async_trait::async_trait;
use std::env;
use std::time::Duration;
use tracing::debug;

#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    credential: ApiKeyCredential,
}

impl HttpTransport {
    pub fn new(credential: ApiKeyCredential) -> Result<Self> {
        Self::with_base_url(credential, API_BASE_URL)
    }

    /// Build a transport against a non-default base URL (primarily for
    /// testing with mock servers).
    pub fn with_base_url(credential: ApiKeyCredential, base_url: impl Into<String>) -> Result<Self> {
        // Minimal production-friendly defaults (env-overridable).
        let timeout_secs = env::var("B2B_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(
                env::var("B2B_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            )
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn dispatch(&self, descriptor: &RequestDescriptor) -> Result<serde_json::Value> {
        let url = descriptor.url(&self.base_url);
        debug!(method = %descriptor.method, endpoint = %descriptor.endpoint, "dispatching request");

        let request = match descriptor.method.as_str() {
            "POST" => self.client.post(&url),
            _ => self.client.get(&url),
        };

        let response = request
            .header(API_KEY_HEADER, self.credential.expose())
            .timeout(descriptor.timeout)
            .json(&descriptor.body)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            let body: Option<serde_json::Value> = serde_json::from_str(&text).ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("error").or_else(|| b.get("message")))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
                body,
            });
        }

        // An empty 2xx body is surfaced as an empty object.
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl super::Transport for HttpTransport {
    async fn execute(&self, descriptor: &RequestDescriptor) -> Result<serde_json::Value> {
        self.dispatch(descriptor).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
