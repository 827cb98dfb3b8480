//! Common trait for file list providers
//!
//! [`FileListSource`] is the seam between the presentation layer and the
//! transport: consumers depend on the trait and can substitute a
//! fixture-backed source in tests instead of a live HTTP client.

use crate::client::EdfApiClient;
use crate::error::Result;
use crate::models::FileInfo;
use async_trait::async_trait;

/// Capability for retrieving the current list of EDF file metadata
///
/// One operation, one outcome: each call performs an independent fetch and
/// resolves to either the full ordered record list or an error.
#[async_trait]
pub trait FileListSource: Send + Sync {
    /// Fetch the full current file list, in provider order
    async fn list_files(&self) -> Result<Vec<FileInfo>>;
}

#[async_trait]
impl FileListSource for EdfApiClient {
    async fn list_files(&self) -> Result<Vec<FileInfo>> {
        EdfApiClient::list_files(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Channel;

    struct FixtureSource {
        files: Vec<FileInfo>,
    }

    #[async_trait]
    impl FileListSource for FixtureSource {
        async fn list_files(&self) -> Result<Vec<FileInfo>> {
            Ok(self.files.clone())
        }
    }

    #[tokio::test]
    async fn test_fixture_source_substitutes_for_client() {
        let source = FixtureSource {
            files: vec![FileInfo {
                file_name: "fixture.edf".to_string(),
                valid: true,
                identifier: "id-1".to_string(),
                recording_date: "2024-01-01T00:00:00Z".to_string(),
                patient_name: String::new(),
                channels: vec![Channel::new("EEG Fpz-Cz", "EEG")],
                recording_length_seconds: 60.0,
                number_of_annotations: 0,
            }],
        };

        let source: &dyn FileListSource = &source;
        let files = source.list_files().await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "fixture.edf");
    }
}
