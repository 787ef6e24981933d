//! Host parameter surface.
//!
//! The embedding host owns parameter storage and rendering; the client only
//! needs a capability to read named, typed parameters for a given input
//! item. [`ParameterSource`] is that seam, and [`extract_request`] turns
//! the untyped surface into a typed [`OperationRequest`].
//!
//! Parameter names (`operation`, `filterLogic`, `peopleFilters`, …) are
//! part of the external contract and must stay compatible with saved
//! configurations.

use crate::filter::{ConditionEntry, FilterGroup, FilterLogic, SearchFilters};
use crate::request::{
    Category, EnrichCompanyParams, EnrichProfileParams, LlmSearchParams, Operation,
    OperationRequest, SearchParams, TextToFiltersParams,
};
use crate::{Error, ErrorContext, Result};
use serde_json::Value;

/// Read access to named per-item parameters.
pub trait ParameterSource {
    /// Raw value of a named parameter for the given input item, or `None`
    /// when the parameter is unset.
    fn get(&self, name: &str, item_index: usize) -> Option<Value>;

    fn get_string(&self, name: &str, item_index: usize) -> Option<String> {
        match self.get(name, item_index) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    fn get_u32(&self, name: &str, item_index: usize, default: u32) -> u32 {
        self.get(name, item_index)
            .and_then(|v| v.as_u64())
            .map(|n| n as u32)
            .unwrap_or(default)
    }

    fn get_bool(&self, name: &str, item_index: usize, default: bool) -> bool {
        self.get(name, item_index)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }
}

/// In-memory [`ParameterSource`] backed by one JSON object per item.
///
/// Non-object items contribute no parameters.
#[derive(Debug, Clone, Default)]
pub struct ItemParameters {
    items: Vec<serde_json::Map<String, Value>>,
}

impl ItemParameters {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ParameterSource for ItemParameters {
    fn get(&self, name: &str, item_index: usize) -> Option<Value> {
        self.items.get(item_index)?.get(name).cloned()
    }
}

/// Extract the operation and its typed parameters for one input item.
///
/// String parameters default to the empty string when unset, numeric and
/// boolean parameters to their declared defaults; an unknown `operation`
/// value is a validation error.
pub fn extract_request(
    source: &dyn ParameterSource,
    item_index: usize,
) -> Result<OperationRequest> {
    let operation: Operation = source
        .get_string("operation", item_index)
        .unwrap_or_default()
        .parse()?;

    let request = match operation {
        Operation::SearchPeople => {
            OperationRequest::SearchPeople(extract_search(source, item_index, "peopleFilters")?)
        }
        Operation::SearchCompanies => OperationRequest::SearchCompanies(extract_search(
            source,
            item_index,
            "companyFilters",
        )?),
        Operation::AgenticSearch => OperationRequest::AgenticSearch(LlmSearchParams {
            query: source.get_string("query", item_index).unwrap_or_default(),
            category: extract_category(source, item_index),
            count: source.get_u32("countLlm", item_index, 10),
        }),
        Operation::TextToFilters => OperationRequest::TextToFilters(TextToFiltersParams {
            query: source.get_string("query", item_index).unwrap_or_default(),
            category: extract_category(source, item_index),
        }),
        Operation::EnrichProfile => OperationRequest::EnrichProfile(EnrichProfileParams {
            profile_identifier: source
                .get_string("profileIdentifier", item_index)
                .unwrap_or_default(),
            enrich_profile: source.get_bool("enrichProfile", item_index, true),
            enrich_work_email: source.get_bool("enrichWorkEmail", item_index, false),
            enrich_personal_email: source.get_bool("enrichPersonalEmail", item_index, false),
            enrich_phone: source.get_bool("enrichPhone", item_index, false),
        }),
        Operation::EnrichCompany => OperationRequest::EnrichCompany(EnrichCompanyParams {
            company_identifier: source
                .get_string("companyIdentifier", item_index)
                .unwrap_or_default(),
        }),
    };

    Ok(request)
}

fn extract_search(
    source: &dyn ParameterSource,
    item_index: usize,
    filters_param: &str,
) -> Result<SearchParams> {
    // The raw JSON escape hatch wins over the structured builder when set.
    let filters = match source
        .get_string("filtersJson", item_index)
        .filter(|s| !s.trim().is_empty())
    {
        Some(raw) => SearchFilters::from_raw_json(&raw)?,
        None => {
            let logic = source
                .get_string("filterLogic", item_index)
                .and_then(|s| s.parse::<FilterLogic>().ok())
                .unwrap_or_default();
            let entries = extract_conditions(source, item_index, filters_param)?;
            SearchFilters::Structured(FilterGroup::compile(logic, &entries))
        }
    };

    Ok(SearchParams {
        filters,
        count: source.get_u32("count", item_index, 10),
        offset: source.get_u32("offset", item_index, 0),
    })
}

fn extract_conditions(
    source: &dyn ParameterSource,
    item_index: usize,
    filters_param: &str,
) -> Result<Vec<ConditionEntry>> {
    let conditions = source
        .get(filters_param, item_index)
        .and_then(|v| v.get("conditions").cloned());

    match conditions {
        Some(value) => serde_json::from_value(value).map_err(|e| {
            Error::validation_with_context(
                format!("malformed filter conditions: {}", e),
                ErrorContext::new()
                    .with_field_path(format!("{}.conditions", filters_param))
                    .with_source("parameter_extractor"),
            )
        }),
        None => Ok(Vec::new()),
    }
}

fn extract_category(source: &dyn ParameterSource, item_index: usize) -> Category {
    match source.get_string("category", item_index).as_deref() {
        Some("company") => Category::Company,
        _ => Category::People,
    }
}
