//! Error types for the EDF metadata client

/// Result type alias for EDF metadata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the EDF metadata client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (transport-level: connection, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API returned {status} {status_text}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Status text for the code
        status_text: String,
    },

    /// JSON parsing failed (response body did not match the expected shape)
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error (from edfconfig/anyhow)
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a status error from a response status
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// The HTTP status code carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
