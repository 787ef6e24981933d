use crate::batch::{BatchExecutor, ItemOutput};
use crate::credentials::connectivity_probe;
use crate::params::ParameterSource;
use crate::request::{
    EnrichCompanyParams, EnrichProfileParams, LlmSearchParams, OperationRequest, SearchParams,
    TextToFiltersParams,
};
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Client for the DataForB2B API.
///
/// Each typed method compiles its parameters into a request descriptor and
/// executes it with the injected credential; the raw response JSON is
/// returned untouched. For host-driven workloads, [`B2bClient::run_batch`]
/// processes a sequence of parameterized items.
#[derive(Debug)]
pub struct B2bClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) continue_on_fail: bool,
}

impl B2bClient {
    /// Create a client with an explicit API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        crate::client::builder::B2bClientBuilder::new()
            .with_api_key(api_key)
            .build()
    }

    pub fn builder() -> crate::client::builder::B2bClientBuilder {
        crate::client::builder::B2bClientBuilder::new()
    }

    async fn execute(&self, request: OperationRequest) -> Result<Value> {
        self.transport.execute(&request.build()).await
    }

    /// Find professionals using structured filters.
    pub async fn search_people(&self, params: SearchParams) -> Result<Value> {
        self.execute(OperationRequest::SearchPeople(params)).await
    }

    /// Find companies using structured filters.
    pub async fn search_companies(&self, params: SearchParams) -> Result<Value> {
        self.execute(OperationRequest::SearchCompanies(params)).await
    }

    /// Natural language search with server-side interpretation.
    pub async fn agentic_search(&self, params: LlmSearchParams) -> Result<Value> {
        self.execute(OperationRequest::AgenticSearch(params)).await
    }

    /// Convert a natural language query to structured filters.
    pub async fn text_to_filters(&self, params: TextToFiltersParams) -> Result<Value> {
        self.execute(OperationRequest::TextToFilters(params)).await
    }

    /// Retrieve detailed professional data for a known profile.
    pub async fn enrich_profile(&self, params: EnrichProfileParams) -> Result<Value> {
        self.execute(OperationRequest::EnrichProfile(params)).await
    }

    /// Retrieve comprehensive company information for a known company.
    pub async fn enrich_company(&self, params: EnrichCompanyParams) -> Result<Value> {
        self.execute(OperationRequest::EnrichCompany(params)).await
    }

    /// Verify the configured credential with the fixed connectivity probe.
    pub async fn verify_credentials(&self) -> Result<()> {
        self.transport.execute(&connectivity_probe()).await.map(|_| ())
    }

    /// Process a batch of parameterized items sequentially, pairing each
    /// output with its source item index. Failure tolerance follows the
    /// builder's `continue_on_fail` setting.
    pub async fn run_batch(
        &self,
        item_count: usize,
        source: &dyn ParameterSource,
    ) -> Result<Vec<ItemOutput>> {
        BatchExecutor::new()
            .continue_on_fail(self.continue_on_fail)
            .execute(item_count, source, self.transport.as_ref())
            .await
    }
}
