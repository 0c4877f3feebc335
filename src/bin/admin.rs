//! CLI administration tool for tinylink.
//!
//! Inspects and maintains the link table without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Create the `urls` table if it is missing
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Shorten a URL directly
//! cargo run --bin admin -- shorten example.com
//!
//! # Show one link
//! cargo run --bin admin -- show aB3xY9
//!
//! # Totals and most clicked links
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- top --limit 20
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`tinylink::config`].

use tinylink::application::services::LinkService;
use tinylink::config::{self, Config, mask_connection_string};
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::{PgLinkRepository, connect_pool, ensure_schema};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Create a short link
    Shorten {
        /// URL to shorten; `https://` is added when no scheme is given
        url: String,
    },

    /// Show one link by short code
    Show {
        /// Six-character short code
        code: String,
    },

    /// Show link and click totals
    Stats,

    /// List the most clicked links
    Top {
        /// Number of links to show
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the `urls` table if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_pool(&config).await.with_context(|| {
        format!(
            "Failed to connect to database at {}",
            mask_connection_string(&config.database_url)
        )
    })?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Shorten { url } => handle_shorten(&config, &pool, url).await?,
        Commands::Show { code } => handle_show(&config, &pool, code).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Top { limit } => handle_top(&pool, limit).await?,
    }

    pool.close().await;

    Ok(())
}

fn repository(pool: &PgPool) -> Arc<PgLinkRepository> {
    Arc::new(PgLinkRepository::new(Arc::new(pool.clone())))
}

fn link_service(config: &Config, pool: &PgPool) -> LinkService {
    LinkService::new(
        repository(pool),
        config.base_url.clone(),
        config.code_max_attempts,
    )
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            repository(pool)
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Init => {
            ensure_schema(pool)
                .await
                .context("Failed to create table `urls`")?;

            println!("{}", "Table `urls` is ready".green().bold());
        }
    }

    Ok(())
}

/// Creates a short link and prints it.
async fn handle_shorten(config: &Config, pool: &PgPool, url: String) -> Result<()> {
    let service = link_service(config, pool);

    let link = service
        .shorten(Some(&url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Short link created".green().bold());
    println!("  URL:   {}", link.original_url.cyan());
    println!(
        "  Short: {}",
        service.short_url(&link.short_code).bright_yellow().bold()
    );

    Ok(())
}

/// Prints one link without counting a click.
async fn handle_show(config: &Config, pool: &PgPool, code: String) -> Result<()> {
    let service = link_service(config, pool);

    let link = service
        .stats(&code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("  Code:   {}", link.short_code.cyan());
    println!("  Short:  {}", service.short_url(&link.short_code));
    println!("  URL:    {}", link.original_url);
    println!(
        "  Clicks: {}",
        link.clicks.to_string().bright_green().bold()
    );

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let totals = repository(pool)
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load totals: {}", e))?;

    println!(
        "  Links:  {}",
        totals.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        totals.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists the most clicked links.
///
/// # Output Format
///
/// ```text
///   Code    Clicks  URL
///   ──────────────────────────────────────────────
///   aB3xY9  42      https://example.com/some/page
/// ```
async fn handle_top(pool: &PgPool, limit: i64) -> Result<()> {
    if limit <= 0 {
        anyhow::bail!("--limit must be positive, got {}", limit);
    }

    let links = repository(pool)
        .top(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<7} {:<7} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for link in &links {
        println!(
            "  {:<7} {:<7} {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_green(),
            link.original_url
        );
    }

    println!();

    Ok(())
}
