//! Job-related API endpoints

use reqwest::Method;
use std::path::Path;
use strata_core::domain::job::Job;
use strata_core::dto::job::{JobQuery, SubmitJob};
use tracing::info;

use crate::StrataClient;
use crate::error::Result;

impl StrataClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit a new job
    ///
    /// The job is created in the `READY` state; call [`StrataClient::start_job`]
    /// to queue it.
    ///
    /// # Arguments
    /// * `req` - The job submission request
    ///
    /// # Returns
    /// The created job, including its platform-assigned id
    ///
    /// # Example
    /// ```no_run
    /// # use strata_client::{Credentials, StrataClient};
    /// # use strata_core::dto::job::SubmitJob;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = StrataClient::new("https://api.strata.example", Credentials::new("token")?);
    /// let job = client
    ///     .submit_job(SubmitJob::new("word-count").with_input("data-1"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_job(&self, req: SubmitJob) -> Result<Job> {
        let response = self.request(Method::POST, &["jobs"])?.json(&req).send().await?;

        let job: Job = self.handle_response(response).await?;
        info!("Submitted job {} for analytic {}", job.id, req.analytic_id);
        Ok(job)
    }

    /// Start a submitted job
    ///
    /// # Arguments
    /// * `job_id` - The job id
    pub async fn start_job(&self, job_id: &str) -> Result<()> {
        let response = self
            .request(Method::PUT, &["jobs", job_id, "start"])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// Cancel a job
    ///
    /// # Arguments
    /// * `job_id` - The job id
    pub async fn cancel_job(&self, job_id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &["jobs", job_id])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    // =============================================================================
    // Job Query
    // =============================================================================

    /// Get a job by id
    ///
    /// # Arguments
    /// * `job_id` - The job id
    ///
    /// # Returns
    /// A fresh snapshot of the job
    pub async fn get_job(&self, job_id: &str) -> Result<Job> {
        let response = self
            .request(Method::GET, &["jobs", job_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List jobs matching `query`
    ///
    /// # Arguments
    /// * `query` - Filters; unset fields are not sent
    ///
    /// # Returns
    /// The matching jobs
    pub async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>> {
        let response = self
            .request(Method::GET, &["jobs"])?
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Job Output
    // =============================================================================

    /// Download the output of a completed job
    ///
    /// # Arguments
    /// * `job_id` - The job id
    ///
    /// # Returns
    /// The raw output bytes
    pub async fn download_job_output(&self, job_id: &str) -> Result<Vec<u8>> {
        let response = self
            .request(Method::GET, &["jobs", job_id, "output"])?
            .send()
            .await?;

        self.handle_bytes_response(response).await
    }

    /// Download the output of a completed job into a file
    ///
    /// # Arguments
    /// * `job_id` - The job id
    /// * `path` - Destination file, created or truncated
    ///
    /// # Returns
    /// The number of bytes written
    pub async fn save_job_output(&self, job_id: &str, path: impl AsRef<Path>) -> Result<usize> {
        let output = self.download_job_output(job_id).await?;
        tokio::fs::write(path.as_ref(), &output).await?;

        info!(
            "Saved {} bytes of output for job {} to {}",
            output.len(),
            job_id,
            path.as_ref().display()
        );
        Ok(output.len())
    }
}
