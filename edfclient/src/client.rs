//! HTTP client for the EDF metadata API
//!
//! # Example
//!
//! ```no_run
//! use edfclient::EdfApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdfApiClient::builder()
//!         .base_url("http://localhost:8080")
//!         .build()
//!         .await?;
//!
//!     let files = client.list_files().await?;
//!     for file in &files {
//!         println!("{}: {}", file.file_name, file.channel_summary());
//!     }
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::FileInfo;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default EDF metadata API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Resource path of the file list endpoint, relative to the base URL
pub const FILE_LIST_PATH: &str = "/api/edf-files";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "EDFView/0.1.0 (edfclient)";

/// EDF metadata API client
///
/// Retrieves the list of stored EDF recording files and their metadata.
/// The client is stateless: it holds no response cache and keeps nothing
/// between calls beyond the underlying connection pool. Every call issues
/// exactly one request; there are no retries and no de-duplication of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct EdfApiClient {
    pub(crate) client: Client,
    base_url: String,
    timeout: Duration,
}

impl EdfApiClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Create a client from the global edfconfig configuration
    ///
    /// Reads the API base URL and request timeout from the `api.*` keys.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use edfclient::EdfApiClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let client = EdfApiClient::from_config().await?;
    ///     let files = client.list_files().await?;
    ///     println!("{} file(s)", files.len());
    ///     Ok(())
    /// }
    /// ```
    #[cfg(feature = "edfconfig")]
    pub async fn from_config() -> Result<Self> {
        let config = edfconfig::get_config();
        Self::from_config_obj(config.as_ref()).await
    }

    /// Create a client from a specific Config object
    #[cfg(feature = "edfconfig")]
    pub async fn from_config_obj(config: &edfconfig::Config) -> Result<Self> {
        use crate::config_ext::EdfApiConfigExt;

        Self::builder()
            .base_url(config.get_edf_api_base_url()?)
            .timeout(Duration::from_secs(config.get_edf_api_timeout_secs()?))
            .build()
            .await
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Fetch the full list of stored EDF files with their metadata
    ///
    /// Issues a single `GET {base_url}/api/edf-files` request. The returned
    /// future is lazy: nothing is sent until it is awaited, and dropping it
    /// abandons the request. The record list is returned in server order,
    /// including entries whose `valid` flag is false.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] for transport failures (connection, DNS, timeout)
    /// - [`Error::Status`] when the server answers with a non-2xx status
    /// - [`Error::Json`] when the body is not the expected record array
    pub async fn list_files(&self) -> Result<Vec<FileInfo>> {
        let url = Url::parse(&format!("{}{}", self.base_url, FILE_LIST_PATH))?;

        #[cfg(feature = "logging")]
        tracing::debug!("Fetching file list: {}", url);

        let response = self.client.get(url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::from_status(status));
        }

        let body = response.text().await?;
        let files: Vec<FileInfo> = serde_json::from_str(&body)?;

        #[cfg(feature = "logging")]
        tracing::debug!("Received {} file record(s)", files.len());

        Ok(files)
    }
}

/// Builder for configuring an EdfApiClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Set the API base URL (scheme + host + optional port, no resource path)
    ///
    /// A trailing slash is stripped so the fixed resource path can be
    /// appended verbatim.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a custom reqwest::Client instead of building one
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<EdfApiClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().user_agent(&self.user_agent).build()?,
        };

        Ok(EdfApiClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}
