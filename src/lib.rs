//! # dataforb2b-rs
//!
//! Rust client for the DataForB2B API — search people and companies with
//! structured filters or natural language, and enrich known profiles and
//! companies.
//!
//! ## Overview
//!
//! The crate is deliberately thin: its core is the mapping from an
//! operation plus named parameters to an HTTP request (endpoint selection,
//! JSON body assembly, and compilation of filter conditions into the API's
//! filter-group payload). Transport, credentials and batch execution wrap
//! that core the way an embedding host expects to drive it.
//!
//! ## Key Features
//!
//! - **Typed Client**: [`B2bClient`] with one method per API operation
//! - **Filter Compilation**: structured conditions via [`FilterGroup`],
//!   raw JSON pass-through via [`SearchFilters::Raw`]
//! - **Option Catalogs**: the declared field and operator tables in
//!   [`catalog`], keys byte-compatible with saved configurations
//! - **Batch Execution**: sequential per-item processing with
//!   caller-controlled failure tolerance via [`batch::BatchExecutor`]
//! - **Credential Resolution**: explicit key, OS keyring, or environment
//!   via [`credentials`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dataforb2b_rs::{
//!     B2bClient, ConditionEntry, FilterGroup, FilterLogic, FilterOperator, SearchParams,
//! };
//!
//! #[tokio::main]
//! async fn main() -> dataforb2b_rs::Result<()> {
//!     let client = B2bClient::new("your-api-key")?;
//!
//!     let filters = FilterGroup::new(FilterLogic::And)
//!         .condition(ConditionEntry::new("current_title", FilterOperator::Like, "CTO"))
//!         .condition(ConditionEntry::new("profile_country", FilterOperator::In, "DE, FR"));
//!
//!     let results = client
//!         .search_people(SearchParams::new().filters(filters).count(25))
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&results)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Static field and operator option tables |
//! | [`filter`] | Filter-group data model and compiler |
//! | [`request`] | Operation enumeration and request compilation |
//! | [`params`] | Host parameter capability and typed extraction |
//! | [`client`] | Client implementation and builder |
//! | [`transport`] | Authenticated HTTP execution |
//! | [`batch`] | Sequential batch execution with failure tolerance |
//! | [`credentials`] | API-key resolution and connectivity probe |

pub mod batch;
pub mod catalog;
pub mod client;
pub mod credentials;
pub mod filter;
pub mod params;
pub mod request;
pub mod transport;

// Re-export main types for convenience
pub use batch::{BatchExecutor, BatchOptions, ItemOutput};
pub use client::{B2bClient, B2bClientBuilder};
pub use credentials::ApiKeyCredential;
pub use filter::{
    ConditionEntry, FilterCondition, FilterGroup, FilterLogic, FilterOperator, FilterValue,
    SearchFilters,
};
pub use params::{extract_request, ItemParameters, ParameterSource};
pub use request::{
    Category, EnrichCompanyParams, EnrichProfileParams, LlmSearchParams, Operation,
    OperationRequest, RequestDescriptor, Resource, SearchParams, TextToFiltersParams,
};
pub use transport::{HttpTransport, Transport};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
