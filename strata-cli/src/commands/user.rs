//! User command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use strata_client::StrataClient;
use strata_core::domain::user::{User, UserRole};
use strata_core::dto::user::CreateUser;

use crate::config::Config;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List users
    List,
    /// Show the user the token belongs to
    Me,
    /// Create a user
    Create {
        /// Email address
        email: String,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Grant administrative rights
        #[arg(long)]
        admin: bool,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
}

/// Handle user commands
pub async fn handle_user_command(command: UserCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        UserCommands::List => list_users(&client).await,
        UserCommands::Me => {
            let user = client.current_user().await?;
            print_user(&user);
            Ok(())
        }
        UserCommands::Create { email, name, admin } => {
            let role = if admin {
                UserRole::Admin
            } else {
                UserRole::Member
            };
            let user = client
                .create_user(CreateUser {
                    email,
                    display_name: name,
                    role,
                })
                .await?;
            println!("{}", "✓ User created successfully!".green().bold());
            print_user(&user);
            Ok(())
        }
        UserCommands::Delete { id } => {
            client.delete_user(&id).await?;
            println!("{}", format!("✓ User {} deleted", id).green());
            Ok(())
        }
    }
}

async fn list_users(client: &StrataClient) -> Result<()> {
    let users = client.list_users().await?;

    if users.is_empty() {
        println!("{}", "No users found.".yellow());
    } else {
        println!("{}", format!("Found {} user(s):", users.len()).bold());
        println!();
        for user in users {
            print_user(&user);
        }
    }

    Ok(())
}

fn print_user(user: &User) {
    println!("  {} {}", "▸".cyan(), user.email.bold());
    println!("    ID:   {}", user.id.dimmed());
    if let Some(name) = &user.display_name {
        println!("    Name: {}", name);
    }
    let role = match user.role {
        UserRole::Admin => user.role.to_string().magenta(),
        UserRole::Member => user.role.to_string().normal(),
    };
    println!("    Role: {}", role);
    println!();
}
