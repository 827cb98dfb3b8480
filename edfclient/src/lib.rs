//! EDF metadata client library for EDFView
//!
//! This crate provides a Rust client for the EDF recording metadata API,
//! along with the display projection used to render the file table.
//!
//! # Features
//!
//! - **File List**: Fetch the metadata of all stored EDF recordings in one
//!   call, in server order
//! - **Typed Model**: `FileInfo` / `Channel` structures matching the wire
//!   contract, trusted as received (no client-side re-validation)
//! - **Display Projection**: pure helpers deriving channel summaries,
//!   formatted dates and durations from a record
//! - **Configuration Extension**: API base URL and timeout managed through
//!   `edfconfig` (feature `edfconfig`, enabled by default)
//!
//! # Example
//!
//! ```no_run
//! use edfclient::{EdfApiClient, FileRow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdfApiClient::builder()
//!         .base_url("http://localhost:8080")
//!         .build()
//!         .await?;
//!
//!     // One request per call; the list arrives in server order
//!     let files = client.list_files().await?;
//!     println!("Found {} file(s)", files.len());
//!
//!     for file in &files {
//!         let row = FileRow::from_file(file);
//!         println!("{} [{}] {}", row.file_name, row.validity, row.channels);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration Extension
//!
//! When the `edfconfig` feature is enabled, this crate provides a
//! configuration extension trait for the `api.*` keys:
//!
//! ```no_run
//! use edfconfig::get_config;
//! use edfclient::{EdfApiClient, EdfApiConfigExt};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! println!("API base URL: {}", config.get_edf_api_base_url()?);
//!
//! let client = EdfApiClient::from_config().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Failures are never recovered locally: a transport failure, a non-2xx
//! status or a malformed payload fails the whole fetch and is reported to
//! the caller unchanged. See [`error::Error`] for the taxonomy.

pub mod client;
pub mod error;
pub mod models;
pub mod source;
pub mod view;

#[cfg(feature = "edfconfig")]
pub mod config_ext;

// Re-exports
pub use client::{ClientBuilder, EdfApiClient};
pub use error::{Error, Result};
pub use models::{Channel, FileInfo};
pub use source::FileListSource;
pub use view::{summarize_channels, FileRow};

#[cfg(feature = "edfconfig")]
pub use config_ext::EdfApiConfigExt;
