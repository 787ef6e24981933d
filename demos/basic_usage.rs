//! Basic usage: structured people search plus a company enrichment.
//!
//! Usage:
//!   DATAFORB2B_API_KEY="..." cargo run --example basic_usage

use dataforb2b_rs::{
    B2bClient, ConditionEntry, EnrichCompanyParams, FilterGroup, FilterLogic, FilterOperator,
    SearchParams,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dataforb2b_rs=debug".into()),
        )
        .init();

    let client = B2bClient::builder().build()?;

    let filters = FilterGroup::new(FilterLogic::And)
        .condition(ConditionEntry::new(
            "current_title",
            FilterOperator::Like,
            "Head of Sales",
        ))
        .condition(ConditionEntry::new(
            "profile_country",
            FilterOperator::In,
            "Germany, Austria, Switzerland",
        ))
        .condition(
            ConditionEntry::new("current_company_size", FilterOperator::Between, "50")
                .value2("500"),
        );

    let people = client
        .search_people(SearchParams::new().filters(filters).count(10))
        .await?;
    println!("people: {}", serde_json::to_string_pretty(&people)?);

    let company = client
        .enrich_company(EnrichCompanyParams::new("acme-corp"))
        .await?;
    println!("company: {}", serde_json::to_string_pretty(&company)?);

    Ok(())
}
