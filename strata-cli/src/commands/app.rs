//! Application command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use strata_core::domain::application::Application;
use strata_core::dto::application::CreateApplication;

use crate::config::Config;

/// Application subcommands
#[derive(Subcommand)]
pub enum AppCommands {
    /// List registered applications
    List,
    /// Register an application
    Create {
        /// Application name
        name: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an application
    Delete {
        /// Application ID
        id: String,
    },
}

/// Handle application commands
pub async fn handle_app_command(command: AppCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        AppCommands::List => {
            let apps = client.list_applications().await?;
            if apps.is_empty() {
                println!("{}", "No applications registered.".yellow());
            } else {
                println!(
                    "{}",
                    format!("Found {} application(s):", apps.len()).bold()
                );
                println!();
                for app in apps {
                    print_application(&app);
                }
            }
            Ok(())
        }
        AppCommands::Create { name, description } => {
            let app = client
                .create_application(CreateApplication { name, description })
                .await?;
            println!("{}", "✓ Application registered!".green().bold());
            print_application(&app);
            Ok(())
        }
        AppCommands::Delete { id } => {
            client.delete_application(&id).await?;
            println!("{}", format!("✓ Application {} deleted", id).green());
            Ok(())
        }
    }
}

fn print_application(app: &Application) {
    println!("  {} {}", "▸".cyan(), app.name.bold());
    println!("    ID:        {}", app.id.dimmed());
    if let Some(client_id) = &app.client_id {
        println!("    Client ID: {}", client_id.cyan());
    }
    if let Some(desc) = &app.description {
        println!("    {}", desc.dimmed());
    }
    println!();
}
