//! Operation-to-request compilation.
//!
//! [`OperationRequest::build`] is the core of the crate: a pure mapping from
//! an operation plus its typed parameters to an HTTP method, endpoint path
//! and JSON body. It never blocks, performs no I/O and injects nothing
//! non-deterministic — identical inputs compile to identical descriptors.

use crate::filter::SearchFilters;
use crate::{Error, ErrorContext};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Fixed base URL for all API requests.
pub const API_BASE_URL: &str = "https://api.dataforb2b.ai";

/// Per-request client timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Two-level resource grouping on the invocation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Search,
    Enrich,
}

/// The six API operations. Wire names (`searchPeople`, …) are part of the
/// external contract and must stay compatible with saved configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "searchPeople")]
    SearchPeople,
    #[serde(rename = "searchCompanies")]
    SearchCompanies,
    #[serde(rename = "agenticSearch")]
    AgenticSearch,
    #[serde(rename = "textToFilters")]
    TextToFilters,
    #[serde(rename = "enrichProfile")]
    EnrichProfile,
    #[serde(rename = "enrichCompany")]
    EnrichCompany,
}

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Operation::SearchPeople,
        Operation::SearchCompanies,
        Operation::AgenticSearch,
        Operation::TextToFilters,
        Operation::EnrichProfile,
        Operation::EnrichCompany,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::SearchPeople => "searchPeople",
            Operation::SearchCompanies => "searchCompanies",
            Operation::AgenticSearch => "agenticSearch",
            Operation::TextToFilters => "textToFilters",
            Operation::EnrichProfile => "enrichProfile",
            Operation::EnrichCompany => "enrichCompany",
        }
    }

    /// Endpoint path targeted by this operation.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::SearchPeople => "/search/people",
            Operation::SearchCompanies => "/search/company",
            Operation::AgenticSearch => "/search/llm",
            Operation::TextToFilters => "/search/llm/filters",
            Operation::EnrichProfile => "/enrich/profile",
            Operation::EnrichCompany => "/enrich/company",
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            Operation::SearchPeople
            | Operation::SearchCompanies
            | Operation::AgenticSearch
            | Operation::TextToFilters => Resource::Search,
            Operation::EnrichProfile | Operation::EnrichCompany => Resource::Enrich,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Unknown operation strings fail fast instead of compiling to an empty
    /// request.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("unknown operation '{}'", s),
                    ErrorContext::new()
                        .with_field_path("operation")
                        .with_details(format!(
                            "expected one of: {}",
                            Operation::ALL
                                .iter()
                                .map(|op| op.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        )),
                )
            })
    }
}

/// Search category for the natural-language operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    People,
    Company,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Company => "company",
        }
    }
}

/// Parameters for the structured search operations.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub filters: SearchFilters,
    pub count: u32,
    pub offset: u32,
}

impl SearchParams {
    /// Defaults: empty `and` group, 10 results, no offset.
    pub fn new() -> Self {
        Self {
            filters: SearchFilters::default(),
            count: 10,
            offset: 0,
        }
    }

    pub fn filters(mut self, filters: impl Into<SearchFilters>) -> Self {
        self.filters = filters.into();
        self
    }

    /// Number of results to return (max 1000).
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Pagination offset - number of results to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for agentic (LLM-interpreted) search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmSearchParams {
    /// Natural language search query (min 3 characters; not enforced here).
    pub query: String,
    pub category: Category,
    /// Number of results to return (max 100 for LLM search).
    pub count: u32,
}

impl LlmSearchParams {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
            count: 10,
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// Parameters for converting natural language to structured filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToFiltersParams {
    pub query: String,
    pub category: Category,
}

impl TextToFiltersParams {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }
}

/// Parameters for profile enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichProfileParams {
    /// LinkedIn URL, public ID, or encoded ID.
    pub profile_identifier: String,
    /// Retrieve full profile data (1 credit).
    pub enrich_profile: bool,
    /// Retrieve professional email (3 credits).
    pub enrich_work_email: bool,
    /// Retrieve personal email (1 credit).
    pub enrich_personal_email: bool,
    /// Retrieve phone number (10 credits).
    pub enrich_phone: bool,
}

impl EnrichProfileParams {
    pub fn new(profile_identifier: impl Into<String>) -> Self {
        Self {
            profile_identifier: profile_identifier.into(),
            enrich_profile: true,
            enrich_work_email: false,
            enrich_personal_email: false,
            enrich_phone: false,
        }
    }

    pub fn work_email(mut self, enable: bool) -> Self {
        self.enrich_work_email = enable;
        self
    }

    pub fn personal_email(mut self, enable: bool) -> Self {
        self.enrich_personal_email = enable;
        self
    }

    pub fn phone(mut self, enable: bool) -> Self {
        self.enrich_phone = enable;
        self
    }
}

/// Parameters for company enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichCompanyParams {
    /// Company slug, LinkedIn URL, or encoded ID.
    pub company_identifier: String,
}

impl EnrichCompanyParams {
    pub fn new(company_identifier: impl Into<String>) -> Self {
        Self {
            company_identifier: company_identifier.into(),
        }
    }
}

/// An operation paired with its typed parameters, ready to compile.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationRequest {
    SearchPeople(SearchParams),
    SearchCompanies(SearchParams),
    AgenticSearch(LlmSearchParams),
    TextToFilters(TextToFiltersParams),
    EnrichProfile(EnrichProfileParams),
    EnrichCompany(EnrichCompanyParams),
}

impl OperationRequest {
    pub fn operation(&self) -> Operation {
        match self {
            OperationRequest::SearchPeople(_) => Operation::SearchPeople,
            OperationRequest::SearchCompanies(_) => Operation::SearchCompanies,
            OperationRequest::AgenticSearch(_) => Operation::AgenticSearch,
            OperationRequest::TextToFilters(_) => Operation::TextToFilters,
            OperationRequest::EnrichProfile(_) => Operation::EnrichProfile,
            OperationRequest::EnrichCompany(_) => Operation::EnrichCompany,
        }
    }

    /// Compile into a concrete HTTP request descriptor.
    pub fn build(&self) -> RequestDescriptor {
        let body = match self {
            OperationRequest::SearchPeople(p) | OperationRequest::SearchCompanies(p) => json!({
                "filters": p.filters,
                "count": p.count,
                "offset": p.offset,
            }),
            OperationRequest::AgenticSearch(p) => json!({
                "query": p.query,
                "category": p.category,
                "count": p.count,
            }),
            OperationRequest::TextToFilters(p) => json!({
                "query": p.query,
                "category": p.category,
            }),
            OperationRequest::EnrichProfile(p) => json!({
                "profile_identifier": p.profile_identifier,
                "enrich_profile": p.enrich_profile,
                "enrich_work_email": p.enrich_work_email,
                "enrich_personal_email": p.enrich_personal_email,
                "enrich_phone": p.enrich_phone,
            }),
            OperationRequest::EnrichCompany(p) => json!({
                "company_identifier": p.company_identifier,
            }),
        };

        RequestDescriptor {
            method: "POST".to_string(),
            endpoint: self.operation().endpoint().to_string(),
            body,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// A fully compiled HTTP request, ready for the transport layer. Built
/// fresh per item; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method. Every API operation uses POST.
    pub method: String,
    /// Endpoint path relative to the base URL.
    pub endpoint: String,
    /// JSON request body.
    pub body: Value,
    pub timeout: Duration,
}

impl RequestDescriptor {
    /// Absolute URL against the given base.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ConditionEntry, FilterGroup, FilterLogic, FilterOperator};

    #[test]
    fn test_operation_wire_names() {
        let names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "searchPeople",
                "searchCompanies",
                "agenticSearch",
                "textToFilters",
                "enrichProfile",
                "enrichCompany"
            ]
        );
    }

    #[test]
    fn test_unknown_operation_fails_fast() {
        let err = "searchPets".parse::<Operation>().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("unknown operation"));
    }

    #[test]
    fn test_search_people_request() {
        let group = FilterGroup::new(FilterLogic::Or).condition(ConditionEntry::new(
            "current_title",
            FilterOperator::Like,
            "CEO",
        ));
        let req = OperationRequest::SearchPeople(
            SearchParams::new().filters(group).count(5).offset(0),
        );
        let descriptor = req.build();

        assert_eq!(descriptor.method, "POST");
        assert_eq!(descriptor.endpoint, "/search/people");
        assert_eq!(
            descriptor.body,
            json!({
                "filters": {
                    "op": "or",
                    "conditions": [
                        {"field": "current_title", "op": "like", "value": "CEO"}
                    ]
                },
                "count": 5,
                "offset": 0,
            })
        );
    }

    #[test]
    fn test_enrich_company_request_has_no_extra_fields() {
        let req = OperationRequest::EnrichCompany(EnrichCompanyParams::new("acme"));
        let descriptor = req.build();

        assert_eq!(descriptor.endpoint, "/enrich/company");
        assert_eq!(descriptor.body, json!({"company_identifier": "acme"}));
    }

    #[test]
    fn test_agentic_search_request() {
        let req = OperationRequest::AgenticSearch(
            LlmSearchParams::new("CTOs in Berlin fintech", Category::People).count(25),
        );
        let descriptor = req.build();

        assert_eq!(descriptor.endpoint, "/search/llm");
        assert_eq!(
            descriptor.body,
            json!({"query": "CTOs in Berlin fintech", "category": "people", "count": 25})
        );
    }

    #[test]
    fn test_text_to_filters_request() {
        let req = OperationRequest::TextToFilters(TextToFiltersParams::new(
            "companies in Paris",
            Category::Company,
        ));
        let descriptor = req.build();

        assert_eq!(descriptor.endpoint, "/search/llm/filters");
        assert_eq!(
            descriptor.body,
            json!({"query": "companies in Paris", "category": "company"})
        );
    }

    #[test]
    fn test_enrich_profile_request_defaults() {
        let req = OperationRequest::EnrichProfile(EnrichProfileParams::new(
            "https://linkedin.com/in/someone",
        ));
        let descriptor = req.build();

        assert_eq!(descriptor.endpoint, "/enrich/profile");
        assert_eq!(
            descriptor.body,
            json!({
                "profile_identifier": "https://linkedin.com/in/someone",
                "enrich_profile": true,
                "enrich_work_email": false,
                "enrich_personal_email": false,
                "enrich_phone": false,
            })
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let req = OperationRequest::SearchCompanies(
            SearchParams::new()
                .filters(FilterGroup::new(FilterLogic::And).condition(
                    ConditionEntry::new("employee_count", FilterOperator::Between, "10")
                        .value2("100"),
                ))
                .count(50),
        );
        let first = req.build();
        let second = req.build();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first.body).unwrap(),
            serde_json::to_vec(&second.body).unwrap()
        );
    }

    #[test]
    fn test_timeout_and_base_url() {
        let descriptor = OperationRequest::EnrichCompany(EnrichCompanyParams::new("acme")).build();
        assert_eq!(descriptor.timeout, Duration::from_secs(60));
        assert_eq!(
            descriptor.url(API_BASE_URL),
            "https://api.dataforb2b.ai/enrich/company"
        );
    }

    #[test]
    fn test_resource_grouping() {
        assert_eq!(Operation::AgenticSearch.resource(), Resource::Search);
        assert_eq!(Operation::EnrichProfile.resource(), Resource::Enrich);
    }
}
