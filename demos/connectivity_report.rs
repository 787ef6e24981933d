//! Credential connectivity report.
//!
//! Resolves an API key (keyring, then `DATAFORB2B_API_KEY`), runs the fixed
//! connectivity probe and prints the verdict.
//!
//! Usage:
//!   DATAFORB2B_API_KEY="..." cargo run --example connectivity_report

use dataforb2b_rs::{B2bClient, Error};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let client = match B2bClient::builder().build() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("credential resolution failed: {err}");
            std::process::exit(1);
        }
    };

    let started = Instant::now();
    match client.verify_credentials().await {
        Ok(()) => {
            println!("OK: credential accepted ({} ms)", started.elapsed().as_millis());
        }
        Err(Error::Remote { status, message, .. }) => {
            println!("REJECTED: HTTP {status}: {message}");
            std::process::exit(1);
        }
        Err(err) => {
            println!("UNREACHABLE: {err}");
            std::process::exit(1);
        }
    }

    Ok(())
}
