//! Strata HTTP Client
//!
//! A type-safe HTTP client for the Strata analytics platform API.
//!
//! Besides one method per REST endpoint, the crate provides a generic condition
//! poller ([`wait`]) and the job-completion wait built on it.
//!
//! # Example
//!
//! ```no_run
//! use strata_client::{Credentials, StrataClient, WaitConfig};
//! use strata_core::dto::job::SubmitJob;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StrataClient::new("https://api.strata.example", Credentials::new("token")?);
//!
//!     let job = client.submit_job(SubmitJob::new("word-count")).await?;
//!     client.start_job(&job.id).await?;
//!     client.wait_until_job_completes(&job.id, WaitConfig::default()).await?;
//!
//!     let output = client.download_job_output(&job.id).await?;
//!     println!("{} bytes of output", output.len());
//!     Ok(())
//! }
//! ```

mod analytics;
mod applications;
pub mod auth;
pub mod completion;
mod data;
pub mod error;
mod jobs;
mod users;
pub mod wait;

// Re-export commonly used types
pub use auth::Credentials;
pub use completion::{JobStatusSource, wait_until_job_completes};
pub use error::{ClientError, Result};
pub use wait::{ConditionPoller, WaitConfig, WaitError, wait_for_condition};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the Strata platform API
///
/// Methods are organized into logical groups:
/// - Analytic catalog (list, get)
/// - Data management (upload, list, download, delete)
/// - Job lifecycle (submit, start, cancel, status, output, wait)
/// - User and application administration
#[derive(Debug, Clone)]
pub struct StrataClient {
    /// Base URL of the platform API (e.g., "https://api.strata.example")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Token sent as a bearer header on every request
    credentials: Credentials,
}

impl StrataClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API
    /// * `credentials` - The API token to authenticate with
    ///
    /// # Example
    /// ```
    /// use strata_client::{Credentials, StrataClient};
    ///
    /// let client = StrataClient::new("https://api.strata.example", Credentials::new("token").unwrap());
    /// ```
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_client(base_url, credentials, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use strata_client::{Credentials, StrataClient};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = StrataClient::with_client(
    ///     "https://api.strata.example",
    ///     Credentials::new("token").unwrap(),
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(base_url: impl Into<String>, credentials: Credentials, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        }
    }

    /// Get the base URL of the platform API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start an authenticated request to the base URL extended by `segments`
    ///
    /// Each segment is percent-encoded, so ids containing `/`, `?` or `#`
    /// stay inside their own path segment.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("base URL {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        debug!("{} {}", method, url);
        Ok(self
            .client
            .request(method, url)
            .bearer_auth(self.credentials.token()))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        Self::check_status(response).await?;
        Ok(())
    }

    /// Handle an API response carrying a raw body (e.g., downloads)
    async fn handle_bytes_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}
