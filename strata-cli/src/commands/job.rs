//! Job command handlers
//!
//! Handles all job-related CLI commands including submission,
//! listing, waiting for completion, and downloading output.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use std::time::Duration;
use strata_client::{ClientError, StrataClient, WaitConfig};
use strata_core::domain::job::{FailureType, Job, JobState};
use strata_core::dto::job::{JobQuery, JobSummary, SubmitJob};

use crate::config::Config;
use crate::types::Parameter;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Submit a job for an analytic
    Submit {
        /// Analytic ID
        analytic_id: String,

        /// Job name
        #[arg(short, long)]
        name: Option<String>,

        /// Parameters as key=value pairs (values are parsed as JSON when possible)
        #[arg(short, long, value_parser = Parameter::parse)]
        param: Vec<Parameter>,

        /// IDs of uploaded data objects to use as input
        #[arg(short, long)]
        input: Vec<String>,

        /// Start the job right after submitting it
        #[arg(long)]
        start: bool,

        /// Start the job and wait for it to complete
        #[arg(long)]
        wait: bool,

        #[command(flatten)]
        timing: WaitArgs,
    },
    /// List jobs
    List {
        /// Only jobs in this state (e.g. RUNNING)
        #[arg(long)]
        state: Option<JobState>,

        /// Only jobs of this analytic
        #[arg(long)]
        analytic: Option<String>,

        /// Maximum number of jobs to list
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get job details
    Get {
        /// Job ID
        id: String,
    },
    /// Start a submitted job
    Start {
        /// Job ID
        id: String,
    },
    /// Cancel a job
    Cancel {
        /// Job ID
        id: String,
    },
    /// Wait for a job to complete
    Wait {
        /// Job ID
        id: String,

        #[command(flatten)]
        timing: WaitArgs,
    },
    /// Download job output
    Output {
        /// Job ID
        id: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
}

/// Polling options shared by commands that wait
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct WaitArgs {
    /// Seconds between status checks
    #[arg(long, default_value = "5")]
    interval: u64,

    /// Maximum seconds to wait
    #[arg(long, default_value = "600")]
    max_wait: u64,
}

impl WaitArgs {
    fn to_config(self) -> Result<WaitConfig> {
        WaitConfig::new(
            Duration::from_secs(self.interval),
            Duration::from_secs(self.max_wait),
        )
        .context("Invalid wait options")
    }
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The job command to execute
/// * `config` - The CLI configuration
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        JobCommands::Submit {
            analytic_id,
            name,
            param,
            input,
            start,
            wait,
            timing,
        } => {
            let req = SubmitJob {
                analytic_id,
                name,
                parameters: param.into_iter().map(|p| (p.key, p.value)).collect(),
                input_data: input,
            };
            let wait_config = if wait { Some(timing.to_config()?) } else { None };
            submit_job(&client, req, start || wait, wait_config).await
        }
        JobCommands::List {
            state,
            analytic,
            limit,
        } => {
            let query = JobQuery {
                state,
                analytic_id: analytic,
                limit,
                offset: None,
            };
            list_jobs(&client, &query).await
        }
        JobCommands::Get { id } => get_job(&client, &id).await,
        JobCommands::Start { id } => start_job(&client, &id).await,
        JobCommands::Cancel { id } => cancel_job(&client, &id).await,
        JobCommands::Wait { id, timing } => wait_for_job(&client, &id, timing.to_config()?).await,
        JobCommands::Output { id, out } => download_output(&client, &id, out).await,
    }
}

/// Submit a job, optionally starting it and waiting for it
async fn submit_job(
    client: &StrataClient,
    req: SubmitJob,
    start: bool,
    wait_config: Option<WaitConfig>,
) -> Result<()> {
    let job = client
        .submit_job(req)
        .await
        .context("Failed to submit job")?;

    println!("{}", "✓ Job submitted successfully!".green().bold());
    println!("  Job ID:   {}", job.id.cyan());
    println!("  State:    {}", colorize_state(job.state));

    if start {
        start_job(client, &job.id).await?;
    }

    if let Some(wait_config) = wait_config {
        wait_for_job(client, &job.id, wait_config).await?;
    }

    Ok(())
}

/// List jobs
async fn list_jobs(client: &StrataClient, query: &JobQuery) -> Result<()> {
    let jobs = client.list_jobs(query).await?;

    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
    } else {
        println!("{}", format!("Found {} job(s):", jobs.len()).bold());
        println!();
        for summary in jobs.into_iter().map(JobSummary::from) {
            print_job_summary(&summary);
        }
    }

    Ok(())
}

/// Get and display a single job
async fn get_job(client: &StrataClient, id: &str) -> Result<()> {
    let job = client.get_job(id).await?;

    print_job_details(&job);

    Ok(())
}

/// Start a submitted job
async fn start_job(client: &StrataClient, id: &str) -> Result<()> {
    client
        .start_job(id)
        .await
        .with_context(|| format!("Failed to start job {}", id))?;

    println!("{}", format!("✓ Job {} started", id).green());
    Ok(())
}

/// Cancel a job
async fn cancel_job(client: &StrataClient, id: &str) -> Result<()> {
    client.cancel_job(id).await?;

    println!("{}", format!("✓ Job {} cancelled", id).green());
    Ok(())
}

/// Wait for a job, reporting how the wait ended
async fn wait_for_job(client: &StrataClient, id: &str, wait_config: WaitConfig) -> Result<()> {
    println!(
        "{}",
        format!(
            "Waiting for job {} (checking every {}s, up to {}s)...",
            id,
            wait_config.poll_interval().as_secs(),
            wait_config.max_wait().as_secs()
        )
        .dimmed()
    );

    match client.wait_until_job_completes(id, wait_config).await {
        Ok(()) => {
            println!("{}", format!("✓ Job {} completed", id).green().bold());
            Ok(())
        }
        Err(ClientError::JobExecution {
            failure_type,
            message,
            ..
        }) => {
            println!("{}", format!("✗ Job {} failed", id).red().bold());
            if let Some(failure_type) = failure_type {
                println!("  Attribution: {}", colorize_failure(failure_type));
            }
            if let Some(message) = message {
                println!("  Error:       {}", message.red());
            }
            anyhow::bail!("job {} failed", id)
        }
        Err(err) if err.is_timeout() => {
            println!(
                "{}",
                format!("⚠ Job {} did not finish in time; it may still be running", id).yellow()
            );
            Err(err.into())
        }
        Err(err) => Err(err).with_context(|| format!("Failed while waiting for job {}", id)),
    }
}

/// Download job output to a file or stdout
async fn download_output(client: &StrataClient, id: &str, out: Option<String>) -> Result<()> {
    match out {
        Some(path) => {
            let written = client
                .save_job_output(id, &path)
                .await
                .with_context(|| format!("Failed to save output of job {}", id))?;
            println!(
                "{}",
                format!("✓ Wrote {} bytes to {}", written, path).green()
            );
        }
        None => {
            let output = client.download_job_output(id).await?;
            println!("{}", String::from_utf8_lossy(&output));
        }
    }

    Ok(())
}

/// Print a job summary
fn print_job_summary(job: &JobSummary) {
    println!("  {} Job {}", "▸".cyan(), job.id.dimmed());
    if let Some(name) = &job.name {
        println!("    Name:     {}", name.bold());
    }
    if let Some(analytic) = &job.analytic_id {
        println!("    Analytic: {}", analytic.dimmed());
    }
    println!("    State:    {}", colorize_state(job.state));
    if job.state.is_failure() && job.failure_type != FailureType::None {
        println!("    Failure:  {}", colorize_failure(job.failure_type));
    }
    if let Some(created) = job.created_at {
        println!(
            "    Created:  {}",
            created.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();
}

/// Print detailed job information
fn print_job_details(job: &Job) {
    println!("{}", "Job Details:".bold());
    println!("  ID:          {}", job.id.cyan());
    if let Some(name) = &job.name {
        println!("  Name:        {}", name);
    }
    if let Some(analytic) = &job.analytic_id {
        println!("  Analytic:    {}", analytic.dimmed());
    }
    println!("  State:       {}", colorize_state(job.state));

    if let Some(failure_type) = job.failure_attribution() {
        println!("  Attribution: {}", colorize_failure(failure_type));
    }

    if let Some(created) = job.created_at {
        println!("  Created:     {}", created.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(updated) = job.updated_at {
        println!("  Updated:     {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(expiration) = job.expiration {
        println!("  Expires:     {}", expiration.format("%Y-%m-%d %H:%M:%S"));
    }

    if !job.parameters.is_empty() {
        println!("\n{}", "Parameters:".bold());
        for (key, value) in &job.parameters {
            println!("  {} = {}", key.cyan(), value);
        }
    }

    if let Some(error) = &job.error_message {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }
}

/// Colorize job state for display
fn colorize_state(state: JobState) -> colored::ColoredString {
    let state_str = state.to_string();
    match state {
        JobState::Ready => state_str.dimmed(),
        JobState::Queued | JobState::Scheduled => state_str.yellow(),
        JobState::Running => state_str.cyan(),
        JobState::Complete => state_str.green(),
        JobState::Failed => state_str.red(),
    }
}

/// Colorize failure attribution for display
fn colorize_failure(failure_type: FailureType) -> colored::ColoredString {
    let failure_str = failure_type.to_string();
    match failure_type {
        FailureType::User => failure_str.yellow(),
        FailureType::Analytic | FailureType::Platform => failure_str.red(),
        FailureType::None => failure_str.dimmed(),
    }
}
