//! Analytic command handlers
//!
//! Browses the analytic catalog.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use strata_client::StrataClient;
use strata_core::domain::analytic::Analytic;
use strata_core::dto::analytic::AnalyticQuery;

use crate::config::Config;

/// Analytic subcommands
#[derive(Subcommand)]
pub enum AnalyticCommands {
    /// List analytics
    List {
        /// Only analytics whose name contains this text
        #[arg(long)]
        name: Option<String>,

        /// Maximum number of analytics to list
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get analytic details
    Get {
        /// Analytic ID
        id: String,
    },
}

/// Handle analytic commands
pub async fn handle_analytic_command(command: AnalyticCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        AnalyticCommands::List { name, limit } => {
            let query = AnalyticQuery {
                name,
                limit,
                offset: None,
            };
            list_analytics(&client, &query).await
        }
        AnalyticCommands::Get { id } => get_analytic(&client, &id).await,
    }
}

/// List analytics in the catalog
async fn list_analytics(client: &StrataClient, query: &AnalyticQuery) -> Result<()> {
    let analytics = client.list_analytics(query).await?;

    if analytics.is_empty() {
        println!("{}", "No analytics found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} analytic(s):", analytics.len()).bold()
        );
        println!();
        for analytic in analytics {
            println!("  {} {} {}", "▸".cyan(), analytic.name.bold(), analytic.version.dimmed());
            println!("    ID: {}", analytic.id.dimmed());
            if let Some(desc) = &analytic.description {
                println!("    {}", desc.dimmed());
            }
            println!();
        }
    }

    Ok(())
}

/// Get and display a single analytic
async fn get_analytic(client: &StrataClient, id: &str) -> Result<()> {
    let analytic = client.get_analytic(id).await?;

    print_analytic_details(&analytic);

    Ok(())
}

/// Print detailed analytic information
fn print_analytic_details(analytic: &Analytic) {
    println!("{}", "Analytic Details:".bold());
    println!("  ID:          {}", analytic.id.cyan());
    println!("  Name:        {}", analytic.name.bold());
    println!("  Version:     {}", analytic.version);

    if let Some(desc) = &analytic.description {
        println!("  Description: {}", desc);
    }

    if !analytic.inputs.is_empty() {
        println!("\n{}", "Inputs:".bold());
        let mut names: Vec<&String> = analytic.inputs.keys().collect();
        names.sort();
        for name in names {
            let input = &analytic.inputs[name];
            let required = if input.required && input.default.is_none() {
                " (required)".red().to_string()
            } else {
                String::new()
            };
            println!("  {} : {}{}", name.cyan(), input.input_type, required);
            if let Some(desc) = &input.description {
                println!("      {}", desc.dimmed());
            }
        }
    }
}
