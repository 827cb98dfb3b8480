//! Data models for the EDF metadata API responses
//!
//! This module contains the structures needed to deserialize responses
//! from the EDF metadata API. Records are immutable once received; display
//! strings are derived from them in [`crate::view`], never written back.

use serde::{Deserialize, Serialize};

/// One signal channel within an EDF recording
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    /// Channel name (e.g., electrode label "EEG Fpz-Cz")
    pub name: String,
    /// Signal modality (e.g., "EEG", "EOG")
    #[serde(rename = "type")]
    pub channel_type: String,
}

impl Channel {
    /// Create a new channel
    pub fn new(name: impl Into<String>, channel_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel_type: channel_type.into(),
        }
    }
}

/// Metadata for one stored EDF recording file
///
/// The field order and the `channels` order mirror the server payload
/// exactly; the client never re-sorts or de-duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Name of the underlying file
    pub file_name: String,
    /// Whether the stored file passed format validation upstream.
    /// Invalid files are still listed; validity is informational only.
    pub valid: bool,
    /// Recording identifier assigned by the upstream system (may be empty)
    #[serde(default)]
    pub identifier: String,
    /// Recording start date, ISO-8601, kept verbatim from the wire
    #[serde(default)]
    pub recording_date: String,
    /// Patient name (may be empty/anonymized)
    #[serde(default)]
    pub patient_name: String,
    /// Signal channels in recording order
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Total recording length in seconds
    #[serde(default)]
    pub recording_length_seconds: f64,
    /// Number of annotations in the recording
    #[serde(default)]
    pub number_of_annotations: u64,
}

impl FileInfo {
    /// Number of signal channels in the recording
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Whether the recording carries any annotations
    pub fn has_annotations(&self) -> bool {
        self.number_of_annotations > 0
    }

    /// Human-readable channel summary, see [`crate::view::summarize_channels`]
    pub fn channel_summary(&self) -> String {
        crate::view::summarize_channels(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "fileName": "sleep-cassette-01.edf",
            "valid": true,
            "identifier": "rec-001",
            "recordingDate": "2024-01-01T00:00:00Z",
            "patientName": "John Doe",
            "channels": [
                {"name": "EEG Fpz-Cz", "type": "EEG"},
                {"name": "EEG Pz-Oz", "type": "EEG"},
                {"name": "EOG horizontal", "type": "EOG"}
            ],
            "recordingLengthSeconds": 3600,
            "numberOfAnnotations": 5
        }"#
    }

    #[test]
    fn test_deserialize_file_info() {
        let file: FileInfo = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(file.file_name, "sleep-cassette-01.edf");
        assert!(file.valid);
        assert_eq!(file.identifier, "rec-001");
        assert_eq!(file.recording_date, "2024-01-01T00:00:00Z");
        assert_eq!(file.patient_name, "John Doe");
        assert_eq!(file.channel_count(), 3);
        assert_eq!(file.recording_length_seconds, 3600.0);
        assert_eq!(file.number_of_annotations, 5);
        assert!(file.has_annotations());
    }

    #[test]
    fn test_channel_order_preserved() {
        let file: FileInfo = serde_json::from_str(sample_json()).unwrap();

        let names: Vec<&str> = file.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["EEG Fpz-Cz", "EEG Pz-Oz", "EOG horizontal"]);
        assert_eq!(file.channels[2].channel_type, "EOG");
    }

    #[test]
    fn test_missing_channels_defaults_to_empty() {
        let json = r#"{"fileName": "broken.edf", "valid": false}"#;
        let file: FileInfo = serde_json::from_str(json).unwrap();

        assert!(!file.valid);
        assert!(file.channels.is_empty());
        assert_eq!(file.identifier, "");
        assert_eq!(file.recording_length_seconds, 0.0);
        assert!(!file.has_annotations());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let file = FileInfo {
            file_name: "a.edf".to_string(),
            valid: true,
            identifier: String::new(),
            recording_date: String::new(),
            patient_name: String::new(),
            channels: vec![Channel::new("EMG submental", "EMG")],
            recording_length_seconds: 1.5,
            number_of_annotations: 0,
        };

        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["fileName"], "a.edf");
        assert_eq!(json["channels"][0]["type"], "EMG");
        assert_eq!(json["recordingLengthSeconds"], 1.5);
        assert_eq!(json["numberOfAnnotations"], 0);
    }
}
