//! CLI administration tool for link-shortener.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Shorten a URL (prompts for the URL when omitted)
//! cargo run --bin admin -- shorten https://example.com --code promo1
//!
//! # Resolve a code
//! cargo run --bin admin -- resolve promo1
//!
//! # Show statistics / check the database
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! Reads the same environment variables as the server (see `config`).

use link_shortener::application::services::LinkService;
use link_shortener::config::{self, Config};
use link_shortener::infrastructure::persistence::{self, MIGRATOR, SqliteLinkRepository};
use link_shortener::state::AppLinkService;
use link_shortener::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all links
    List,

    /// Create a short link
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Custom short code
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show the URL behind a short code
    Resolve {
        /// Short code, in any letter case
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
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
    let config = config::load_from_env()?;

    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let service = build_service(&config, pool.clone());

    match cli.command {
        Commands::List => list_links(&service).await?,
        Commands::Shorten { url, code } => shorten(&service, &config, url, code).await?,
        Commands::Resolve { code } => resolve(&service, &code).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn build_service(config: &Config, pool: SqlitePool) -> AppLinkService {
    LinkService::new(
        Arc::new(SqliteLinkRepository::new(Arc::new(pool))),
        RandomCodeGenerator::from_os_rng(),
        Arc::new(config.qr_renderer()),
        config.allocation_policy(),
    )
}

/// Prints every link as a two-column table.
async fn list_links(service: &AppLinkService) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {}",
        "Code".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(60).bright_black());

    for link in &links {
        println!("  {:<12} {}", link.short_code.cyan(), link.long_url);
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn shorten(
    service: &AppLinkService,
    config: &Config,
    url: Option<String>,
    code: Option<String>,
) -> Result<()> {
    let long_url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Long URL").interact_text()?,
    };

    let link = service
        .shorten(long_url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    let short_url = service.get_short_url(&config.parsed_base_url()?, &link.short_code);

    println!("{}", "Short link created".green().bold());
    println!("  Code: {}", link.short_code.bright_yellow().bold());
    println!("  Link: {}", short_url.cyan());
    println!("  URL:  {}", link.long_url);

    Ok(())
}

async fn resolve(service: &AppLinkService, code: &str) -> Result<()> {
    let link = service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  {} -> {}", link.short_code.cyan(), link.long_url);
    println!(
        "  Created: {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  QR image: {}",
        if link.has_image() {
            "stored".green()
        } else {
            "missing".yellow()
        }
    );

    Ok(())
}

async fn handle_stats(service: &AppLinkService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count = service
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
    }

    Ok(())
}
