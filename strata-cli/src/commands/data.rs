//! Data command handlers
//!
//! Uploads, lists, downloads and deletes data objects.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use strata_client::StrataClient;

use crate::config::Config;

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Upload a local file
    Upload {
        /// Path of the file to upload
        file: String,
    },
    /// List uploaded data objects
    List,
    /// Download a data object
    Download {
        /// Data object ID
        id: String,

        /// Destination file
        #[arg(short, long)]
        out: String,
    },
    /// Delete a data object
    Delete {
        /// Data object ID
        id: String,
    },
}

/// Handle data commands
pub async fn handle_data_command(command: DataCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        DataCommands::Upload { file } => upload(&client, &file).await,
        DataCommands::List => list(&client).await,
        DataCommands::Download { id, out } => download(&client, &id, &out).await,
        DataCommands::Delete { id } => delete(&client, &id).await,
    }
}

async fn upload(client: &StrataClient, file: &str) -> Result<()> {
    let object = client
        .upload_file(file)
        .await
        .with_context(|| format!("Failed to upload {}", file))?;

    println!("{}", "✓ Upload complete!".green().bold());
    println!("  Data ID: {}", object.id.cyan());
    println!("  Name:    {}", object.name);
    Ok(())
}

async fn list(client: &StrataClient) -> Result<()> {
    let objects = client.list_data().await?;

    if objects.is_empty() {
        println!("{}", "No data objects found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} data object(s):", objects.len()).bold()
    );
    println!();
    for object in objects {
        println!("  {} {}", "▸".cyan(), object.name.bold());
        println!("    ID:   {}", object.id.dimmed());
        if let Some(size) = object.size_bytes {
            println!("    Size: {} bytes", size);
        }
        println!();
    }

    Ok(())
}

async fn download(client: &StrataClient, id: &str, out: &str) -> Result<()> {
    let bytes = client.download_data(id).await?;
    tokio::fs::write(out, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", out))?;

    println!(
        "{}",
        format!("✓ Wrote {} bytes to {}", bytes.len(), out).green()
    );
    Ok(())
}

async fn delete(client: &StrataClient, id: &str) -> Result<()> {
    client.delete_data(id).await?;

    println!("{}", format!("✓ Data object {} deleted", id).green());
    Ok(())
}
