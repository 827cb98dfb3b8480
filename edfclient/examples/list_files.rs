//! Example: List stored EDF files and their metadata
//!
//! Run with: cargo run -p edfclient --example list_files
//! Or with a specific API host: cargo run -p edfclient --example list_files -- http://localhost:8080

use edfclient::{EdfApiClient, FileRow};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get base URL from command line or use default
    let base_url = env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    println!("Fetching file list from {}...\n", base_url);

    let client = EdfApiClient::builder().base_url(base_url).build().await?;
    let files = client.list_files().await?;

    println!("Found {} file(s)", files.len());
    println!("---");

    for file in &files {
        let row = FileRow::from_file(file);
        println!("{} [{}]", row.file_name, row.validity);
        println!("  Identifier: {}", row.identifier);
        println!("  Recorded: {}", row.recording_date);
        println!("  Patient: {}", row.patient_name);
        println!("  Channels: {}", row.channels);
        println!("  Length: {}", row.recording_length);
        println!("  Annotations: {}", row.annotations);
    }

    Ok(())
}
