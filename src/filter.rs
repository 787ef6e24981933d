//! Filter-group data model and compiler.
//!
//! Search operations constrain their result set with a [`FilterGroup`]: a
//! combinator (`and`/`or`) plus an ordered list of conditions. Conditions
//! arrive from the parameter surface as raw `(field, operator, value,
//! value2?)` entries and are compiled into the wire shape here. The wire
//! key for a condition's operator is `op`, not `operator`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator for a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "not_like")]
    NotLike,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not_in")]
    NotIn,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = "between")]
    Between,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "=",
            FilterOperator::NotEquals => "!=",
            FilterOperator::Like => "like",
            FilterOperator::NotLike => "not_like",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
            FilterOperator::GreaterThan => ">",
            FilterOperator::GreaterThanOrEqual => ">=",
            FilterOperator::LessThan => "<",
            FilterOperator::LessThanOrEqual => "<=",
            FilterOperator::Between => "between",
        }
    }

    /// `in` and `not_in` take a comma-separated value that is exploded into
    /// a list during compilation.
    pub fn is_list_valued(&self) -> bool {
        matches!(self, FilterOperator::In | FilterOperator::NotIn)
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(FilterOperator::Equals),
            "!=" => Ok(FilterOperator::NotEquals),
            "like" => Ok(FilterOperator::Like),
            "not_like" => Ok(FilterOperator::NotLike),
            "in" => Ok(FilterOperator::In),
            "not_in" => Ok(FilterOperator::NotIn),
            ">" => Ok(FilterOperator::GreaterThan),
            ">=" => Ok(FilterOperator::GreaterThanOrEqual),
            "<" => Ok(FilterOperator::LessThan),
            "<=" => Ok(FilterOperator::LessThanOrEqual),
            "between" => Ok(FilterOperator::Between),
            other => Err(crate::Error::validation(format!(
                "unknown filter operator '{}'",
                other
            ))),
        }
    }
}

/// How multiple conditions in a group combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLogic {
    #[default]
    And,
    Or,
}

impl FilterLogic {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterLogic::And => "and",
            FilterLogic::Or => "or",
        }
    }
}

impl FromStr for FilterLogic {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(FilterLogic::And),
            "or" => Ok(FilterLogic::Or),
            other => Err(crate::Error::validation(format!(
                "unknown filter logic '{}'",
                other
            ))),
        }
    }
}

/// Condition value on the wire: a single string, or the exploded list form
/// produced for `in`/`not_in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    List(Vec<String>),
}

/// Raw condition entry as supplied by the parameter surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub field: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<String>,
}

impl ConditionEntry {
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            value2: None,
        }
    }

    /// Second value, used by the `between` operator.
    pub fn value2(mut self, value2: impl Into<String>) -> Self {
        self.value2 = Some(value2.into());
        self
    }
}

/// Compiled wire condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: String,
    pub op: FilterOperator,
    pub value: FilterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<String>,
}

/// Combinator plus ordered conditions, flat (no nesting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub op: FilterLogic,
    pub conditions: Vec<FilterCondition>,
}

impl FilterGroup {
    /// Empty group with the given combinator.
    pub fn new(op: FilterLogic) -> Self {
        Self {
            op,
            conditions: Vec::new(),
        }
    }

    /// Compile raw entries into a group. Output preserves input order; no
    /// deduplication and no field/operator semantic validation.
    pub fn compile(op: FilterLogic, entries: &[ConditionEntry]) -> Self {
        Self {
            op,
            conditions: entries.iter().map(compile_condition).collect(),
        }
    }

    /// Append one compiled condition.
    pub fn condition(mut self, entry: ConditionEntry) -> Self {
        self.conditions.push(compile_condition(&entry));
        self
    }
}

impl Default for FilterGroup {
    fn default() -> Self {
        Self::new(FilterLogic::And)
    }
}

fn compile_condition(entry: &ConditionEntry) -> FilterCondition {
    let value = if entry.operator.is_list_valued() {
        // Comma-separated list: trim each segment, keep empty segments.
        FilterValue::List(
            entry
                .value
                .split(',')
                .map(|v| v.trim().to_string())
                .collect(),
        )
    } else {
        FilterValue::Single(entry.value.clone())
    };

    // value2 only travels with `between`, and only when non-empty.
    let value2 = match entry.operator {
        FilterOperator::Between => entry
            .value2
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        _ => None,
    };

    FilterCondition {
        field: entry.field.clone(),
        op: entry.operator,
        value,
        value2,
    }
}

/// Filter payload attached to a search request.
///
/// The structured variant is the primary path; `Raw` passes a
/// caller-supplied JSON blob through unchanged. Well-formedness is the only
/// check applied to raw filters — semantic validity is left to the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchFilters {
    Structured(FilterGroup),
    Raw(serde_json::Value),
}

impl SearchFilters {
    /// Parse a raw JSON filter blob (escape hatch for filters the
    /// structured builder cannot express).
    pub fn from_raw_json(text: &str) -> crate::Result<Self> {
        Ok(SearchFilters::Raw(serde_json::from_str(text)?))
    }
}

impl From<FilterGroup> for SearchFilters {
    fn from(group: FilterGroup) -> Self {
        SearchFilters::Structured(group)
    }
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters::Structured(FilterGroup::default())
    }
}
