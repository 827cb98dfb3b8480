use edfclient::{EdfApiClient, FileRow};
use edfconfig::get_config;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HEADERS: [&str; 8] = [
    "File",
    "Validity",
    "Identifier",
    "Recorded",
    "Patient",
    "Channels",
    "Length",
    "Annotations",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Logging & configuration ==========

    let config = get_config();

    if config.get_log_enable_console() {
        let min_level = config
            .get_log_min_level()
            .unwrap_or_else(|_| "INFO".to_string());
        let filter = EnvFilter::try_new(min_level).unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let client = EdfApiClient::from_config().await?;
    info!("Querying EDF metadata API at {}", client.base_url());

    // ========== PHASE 2 : Fetch once, render ==========

    // One fetch per run. On failure the table is not rendered at all:
    // an error must never look like an empty file list.
    let files = match client.list_files().await {
        Ok(files) => files,
        Err(err) => {
            eprintln!("Failed to fetch the EDF file list: {}", err);
            std::process::exit(1);
        }
    };

    let rows: Vec<FileRow> = files.iter().map(FileRow::from_file).collect();
    render_table(&rows);
    println!();
    println!("{} file(s)", rows.len());

    Ok(())
}

fn row_cells(row: &FileRow) -> [&str; 8] {
    [
        &row.file_name,
        &row.validity,
        &row.identifier,
        &row.recording_date,
        &row.patient_name,
        &row.channels,
        &row.recording_length,
        &row.annotations,
    ]
}

/// Print the file table with columns sized to their widest cell
fn render_table(rows: &[FileRow]) {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row_cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    let header = header.join("  ");
    println!("{}", header);
    println!("{}", "-".repeat(header.chars().count()));

    for row in rows {
        let line: Vec<String> = row_cells(row)
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        println!("{}", line.join("  "));
    }
}
