//! CLI administration tool for user-admission.
//!
//! Manages the client records users are admitted under, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a client
//! cargo run --bin admin -- client add --name ImportantClient --status gold
//!
//! # List clients with their classification
//! cargo run --bin admin -- client list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use user_admission::domain::entities::{ClientStatus, NewClient};
use user_admission::domain::repositories::ClientRepository;
use user_admission::infrastructure::persistence::PgClientRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-admission.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Client management subcommands.
#[derive(Subcommand)]
enum ClientAction {
    /// Register a new client
    Add {
        /// Client name; "ImportantClient" and "VeryImportantClient" select credit strategies
        #[arg(short, long)]
        name: String,

        /// Client status: regular, gold or platinum
        #[arg(short, long, default_value = "regular")]
        status: ClientStatus,
    },

    /// List all clients
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = PgClientRepository::new(Arc::new(pool));

    match cli.command {
        Commands::Client { action } => handle_client_action(action, &repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo).await?,
    }

    Ok(())
}

/// Dispatches client management commands.
async fn handle_client_action(action: ClientAction, repo: &PgClientRepository) -> Result<()> {
    match action {
        ClientAction::Add { name, status } => {
            let client = repo
                .insert(NewClient { name, status })
                .await
                .context("Failed to create client")?;

            println!("{}", "✓ Client created".green().bold());
            println!("  ID:             {}", client.id.to_string().cyan());
            println!("  Name:           {}", client.name);
            println!("  Status:         {}", client.status);
            println!("  Classification: {:?}", client.classification());
        }
        ClientAction::List => {
            let clients = repo.list().await.context("Failed to list clients")?;

            if clients.is_empty() {
                println!("{}", "No clients registered".yellow());
                return Ok(());
            }

            println!(
                "{}",
                format!(
                    "{:<6} {:<30} {:<10} {}",
                    "ID", "NAME", "STATUS", "CLASSIFICATION"
                )
                .bold()
            );
            for client in clients {
                println!(
                    "{:<6} {:<30} {:<10} {:?}",
                    client.id,
                    client.name,
                    client.status.to_string(),
                    client.classification()
                );
            }
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, repo: &PgClientRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            if repo.health_check().await {
                println!("{}", "✓ Database connection OK".green().bold());
            } else {
                println!("{}", "✗ Database connection failed".red().bold());
                anyhow::bail!("Database check failed");
            }
        }
    }

    Ok(())
}
