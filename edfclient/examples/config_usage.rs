//! Example: Drive the client from the edfconfig configuration
//!
//! Run with: cargo run -p edfclient --example config_usage
//!
//! The API base URL and timeout come from the `api.*` keys of the EDFView
//! configuration (`~/.edfview/config.yaml`, overridable with
//! `EDFVIEW_CONFIG__API__BASE_URL`).

use edfclient::{EdfApiClient, EdfApiConfigExt};
use edfconfig::get_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = get_config();

    if !config.get_edf_api_enabled()? {
        println!("EDF metadata API is disabled in the configuration");
        return Ok(());
    }

    println!("API base URL: {}", config.get_edf_api_base_url()?);
    println!("Request timeout: {}s", config.get_edf_api_timeout_secs()?);

    let client = EdfApiClient::from_config().await?;
    let files = client.list_files().await?;

    println!("{} file(s) stored:", files.len());
    for file in &files {
        println!(
            "  {} ({} channel(s), {} annotation(s))",
            file.file_name,
            file.channel_count(),
            file.number_of_annotations
        );
    }

    Ok(())
}
