//! Waiting for a job to finish
//!
//! Combines the [`ConditionPoller`] with a [`JobStatusSource`]: each tick
//! fetches one job snapshot and classifies its state.
//!
//! - `COMPLETE` ends the wait successfully.
//! - `FAILED` ends it immediately with [`ClientError::JobExecution`].
//! - Any other state keeps waiting until the budget runs out.
//!
//! Fetch errors are not retried; they end the wait as they are.

use async_trait::async_trait;
use strata_core::domain::job::Job;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::StrataClient;
use crate::error::{ClientError, Result};
use crate::wait::{ConditionPoller, WaitConfig};

/// Source of job status snapshots
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    /// Fetches the current snapshot of `job_id`
    async fn fetch_job(&self, job_id: &str) -> Result<Job>;
}

#[async_trait]
impl JobStatusSource for StrataClient {
    async fn fetch_job(&self, job_id: &str) -> Result<Job> {
        self.get_job(job_id).await
    }
}

/// Waits until `job_id` reaches `COMPLETE`.
///
/// # Errors
/// * [`ClientError::JobExecution`] as soon as the job is seen `FAILED`
/// * [`ClientError::Wait`] with a timeout when `config.max_wait()` elapses
/// * whatever error the status fetch returns
pub async fn wait_until_job_completes<S>(source: &S, job_id: &str, config: WaitConfig) -> Result<()>
where
    S: JobStatusSource + ?Sized,
{
    poll_until_complete(&ConditionPoller::new(config), source, job_id).await
}

/// Like [`wait_until_job_completes`], additionally ending with
/// [`crate::WaitError::Cancelled`] once `token` fires
pub async fn wait_until_job_completes_with_cancel<S>(
    source: &S,
    job_id: &str,
    config: WaitConfig,
    token: CancellationToken,
) -> Result<()>
where
    S: JobStatusSource + ?Sized,
{
    let poller = ConditionPoller::new(config).with_cancellation(token);
    poll_until_complete(&poller, source, job_id).await
}

async fn poll_until_complete<S>(poller: &ConditionPoller, source: &S, job_id: &str) -> Result<()>
where
    S: JobStatusSource + ?Sized,
{
    info!(
        "Waiting for job {} (interval: {:?}, max wait: {:?})",
        job_id,
        poller.config().poll_interval(),
        poller.config().max_wait()
    );

    poller
        .wait(move || async move {
            let job = source.fetch_job(job_id).await?;
            debug!("Job {} is {}", job_id, job.state);

            if job.state.is_failure() {
                return Err(ClientError::job_failed(&job));
            }

            Ok(job.state.is_success().then_some(()))
        })
        .await?;

    info!("Job {} completed", job_id);
    Ok(())
}

impl StrataClient {
    /// Wait until a job completes
    ///
    /// Polls `GET /jobs/{id}` every `config.poll_interval()` until the job is
    /// `COMPLETE`, fails, or `config.max_wait()` elapses.
    ///
    /// # Example
    /// ```no_run
    /// # use strata_client::{Credentials, StrataClient, WaitConfig};
    /// # use std::time::Duration;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = StrataClient::new("https://api.strata.example", Credentials::new("token")?);
    /// let config = WaitConfig::new(Duration::from_secs(2), Duration::from_secs(120))?;
    /// client.wait_until_job_completes("job-123", config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn wait_until_job_completes(&self, job_id: &str, config: WaitConfig) -> Result<()> {
        wait_until_job_completes(self, job_id, config).await
    }

    /// Wait until a job completes or `token` is cancelled
    pub async fn wait_until_job_completes_with_cancel(
        &self,
        job_id: &str,
        config: WaitConfig,
        token: CancellationToken,
    ) -> Result<()> {
        wait_until_job_completes_with_cancel(self, job_id, config, token).await
    }
}
