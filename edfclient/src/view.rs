//! Display projection for file metadata
//!
//! Pure, synchronous helpers that turn one [`FileInfo`] into
//! presentation-ready strings. Nothing here touches the network, mutates
//! its input, or fails: missing or unparsable display data degrades to an
//! empty or verbatim string.

use crate::models::FileInfo;
use chrono::{DateTime, Utc};

/// Summarize the channels of a recording as a single string
///
/// Each channel contributes `"{name} {type}"`; channels are joined with
/// `", "` in recording order. An empty channel list yields `""`.
///
/// # Example
///
/// ```
/// use edfclient::models::{Channel, FileInfo};
/// use edfclient::view::summarize_channels;
///
/// let file = FileInfo {
///     file_name: "night1.edf".to_string(),
///     valid: true,
///     identifier: String::new(),
///     recording_date: String::new(),
///     patient_name: String::new(),
///     channels: vec![
///         Channel::new("EEG Fpz-Cz", "EEG"),
///         Channel::new("EEG Pz-Oz", "EEG"),
///     ],
///     recording_length_seconds: 0.0,
///     number_of_annotations: 0,
/// };
/// assert_eq!(summarize_channels(&file), "EEG Fpz-Cz EEG, EEG Pz-Oz EEG");
/// ```
pub fn summarize_channels(file: &FileInfo) -> String {
    file.channels
        .iter()
        .map(|c| format!("{} {}", c.name, c.channel_type))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a recording length in seconds as `H:MM:SS`
///
/// Fractional seconds are truncated. Negative values (which the API never
/// sends) clamp to zero.
pub fn format_recording_length(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

/// Format an ISO-8601 recording date for display
///
/// Renders `YYYY-MM-DD HH:MM:SS` in UTC when the input parses as RFC 3339.
/// Anything else is returned verbatim, so an unexpected server format is
/// still visible rather than hidden.
pub fn format_recording_date(recording_date: &str) -> String {
    match DateTime::parse_from_rfc3339(recording_date) {
        Ok(date) => date
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => recording_date.to_string(),
    }
}

/// Display label for the upstream validation flag
pub fn validity_label(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

/// Display-ready projection of one [`FileInfo`]
///
/// Every column the viewer renders, as owned strings. Building a row never
/// fails and never alters the source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub file_name: String,
    pub validity: String,
    pub identifier: String,
    pub recording_date: String,
    pub patient_name: String,
    pub channels: String,
    pub recording_length: String,
    pub annotations: String,
}

impl FileRow {
    /// Project a metadata record into its display row
    pub fn from_file(file: &FileInfo) -> Self {
        Self {
            file_name: file.file_name.clone(),
            validity: validity_label(file.valid).to_string(),
            identifier: file.identifier.clone(),
            recording_date: format_recording_date(&file.recording_date),
            patient_name: file.patient_name.clone(),
            channels: summarize_channels(file),
            recording_length: format_recording_length(file.recording_length_seconds),
            annotations: file.number_of_annotations.to_string(),
        }
    }
}
