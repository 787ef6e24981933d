//! HTTP boundary: authenticated request execution.

mod http;

pub use http::{HttpTransport, TransportError};

use crate::request::RequestDescriptor;
use crate::Result;
use async_trait::async_trait;

/// Execution seam between request building and the wire.
///
/// Object-safe so the batch executor can run against a stub in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute an authenticated request and return the response JSON.
    async fn execute(&self, descriptor: &RequestDescriptor) -> Result<serde_json::Value>;
}
