//! Error types for the Strata client

use strata_core::domain::job::{FailureType, Job};
use thiserror::Error;

use crate::wait::WaitError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Strata client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Reading or writing a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Credentials are missing or malformed
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    /// A wait session timed out, was cancelled or misconfigured
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// The remote job reached the `FAILED` state
    #[error("Job {job_id} failed{}", failure_suffix(.failure_type, .message))]
    JobExecution {
        /// Identifier of the failed job
        job_id: String,
        /// Fault attribution, when the platform reported one
        failure_type: Option<FailureType>,
        /// Failure description from the platform
        message: Option<String>,
    },
}

fn failure_suffix(failure_type: &Option<FailureType>, message: &Option<String>) -> String {
    let mut suffix = String::new();
    if let Some(failure_type) = failure_type {
        suffix.push_str(&format!(" ({} failure)", failure_type));
    }
    if let Some(message) = message {
        suffix.push_str(": ");
        suffix.push_str(message);
    }
    suffix
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a job execution error from a failed job snapshot
    pub fn job_failed(job: &Job) -> Self {
        Self::JobExecution {
            job_id: job.id.clone(),
            failure_type: job.failure_attribution(),
            message: job.error_message.clone(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }

    /// Check if a wait ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Wait(WaitError::Timeout { .. }))
    }

    /// Check if the remote job failed
    pub fn is_job_failure(&self) -> bool {
        matches!(self, Self::JobExecution { .. })
    }

    /// Whether repeating the whole call may succeed.
    ///
    /// A failed job is terminal and has to be resubmitted instead.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RequestFailed(_) => true,
            Self::Wait(WaitError::Timeout { .. }) => true,
            Self::ApiError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
