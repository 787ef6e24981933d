//! Batch processing: run a sequence of parameterized items the way an
//! embedding host would, with failure tolerance enabled.
//!
//! Usage:
//!   DATAFORB2B_API_KEY="..." cargo run --example batch_processing

use dataforb2b_rs::{B2bClient, ItemParameters};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let client = B2bClient::builder().continue_on_fail(true).build()?;

    let items = ItemParameters::new(vec![
        json!({
            "operation": "enrichCompany",
            "companyIdentifier": "acme-corp",
        }),
        json!({
            "operation": "agenticSearch",
            "query": "VP Engineering at Series B startups in Berlin",
            "category": "people",
            "countLlm": 5,
        }),
        json!({
            "operation": "textToFilters",
            "query": "logistics companies with more than 200 employees",
            "category": "company",
        }),
    ]);

    let outputs = client.run_batch(items.len(), &items).await?;
    for output in outputs {
        println!(
            "item {}: {}",
            output.paired_item,
            serde_json::to_string(&output.json)?
        );
    }

    Ok(())
}
