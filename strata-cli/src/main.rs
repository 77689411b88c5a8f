//! Strata CLI
//!
//! Command-line interface for the Strata analytics platform.

mod commands;
mod config;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "strata_client=info,strata_cli=info";

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Strata analytics platform CLI", long_about = None)]
struct Cli {
    /// Platform API URL
    #[arg(long, env = "STRATA_URL", default_value = "http://localhost:8080")]
    url: String,

    /// API token
    #[arg(long, env = "STRATA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// File containing the API token, used when no token is given
    #[arg(long, env = "STRATA_TOKEN_FILE")]
    token_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.url, cli.token, cli.token_file)?;
    debug!("Using platform API at {}", config.base_url);

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_cli_parses_job_wait() {
        let cli = Cli::try_parse_from([
            "strata",
            "--url",
            "https://api.strata.example",
            "--token",
            "t",
            "job",
            "wait",
            "job-1",
            "--interval",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.url, "https://api.strata.example");
        assert_eq!(cli.token.as_deref(), Some("t"));
    }
}
