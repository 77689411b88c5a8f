//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod analytic;
mod app;
mod data;
mod job;
mod user;

pub use analytic::AnalyticCommands;
pub use app::AppCommands;
pub use data::DataCommands;
pub use job::JobCommands;
pub use user::UserCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Job submission and monitoring
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Analytic catalog
    Analytic {
        #[command(subcommand)]
        command: AnalyticCommands,
    },
    /// Data upload and download
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },
    /// User administration
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Application administration
    App {
        #[command(subcommand)]
        command: AppCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Job { command } => job::handle_job_command(command, config).await,
        Commands::Analytic { command } => analytic::handle_analytic_command(command, config).await,
        Commands::Data { command } => data::handle_data_command(command, config).await,
        Commands::User { command } => user::handle_user_command(command, config).await,
        Commands::App { command } => app::handle_app_command(command, config).await,
    }
}
