//! CLI administration tool for link-shortener.
//!
//! Talks to the configured mapping store directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Compute the code for a link without touching the store
//! cargo run --bin admin -- code https://example.com/a
//!
//! # Shorten a link
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Look up a code
//! cargo run --bin admin -- resolve 2dce0
//!
//! # Check the store connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`link_shortener::config`]. Without a Redis URL the
//! store is in-memory, which only makes sense for `code`.

use link_shortener::application::services::{Resolution, ResolveService, ShortenService};
use link_shortener::config::{self, Config};
use link_shortener::domain::repositories::MappingStore;
use link_shortener::server::build_store;
use link_shortener::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the short code for a link (offline)
    Code {
        link: String,

        /// Code length override (defaults to CODE_LENGTH)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Shorten a link via the configured store
    Shorten { link: String },

    /// Resolve a short code via the configured store
    Resolve { code: String },

    /// Check the store connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Code { link, length } => handle_code(&config, &link, length),
        Commands::Shorten { link } => handle_shorten(&config, &link).await,
        Commands::Resolve { code } => handle_resolve(&config, &code).await,
        Commands::Ping => handle_ping(&config).await,
    }
}

fn handle_code(config: &Config, link: &str, length: Option<usize>) -> Result<()> {
    let generator = match length {
        Some(length) => CodeGenerator::new(length).context("Invalid --length")?,
        None => config.code_generator()?,
    };

    let code = generator
        .generate_from_str(link)
        .context("Cannot generate a code")?;

    println!("{}", code.as_str().bright_yellow().bold());
    Ok(())
}

async fn handle_shorten(config: &Config, link: &str) -> Result<()> {
    warn_if_memory(config);

    let store = build_store(config).await?;
    let service = ShortenService::new(store, config.code_generator()?, config.collision_policy);

    let code = service
        .create_short_code(link)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten link: {}", e))?;

    println!("{} {}", "Shortened:".green().bold(), link.cyan());
    println!("  Code: {}", code.as_str().bright_yellow().bold());
    Ok(())
}

async fn handle_resolve(config: &Config, code: &str) -> Result<()> {
    warn_if_memory(config);

    let store = build_store(config).await?;
    let service = ResolveService::new(store);

    match service.resolve(Some(code)).await {
        Resolution::Found(link) => {
            println!("{} -> {}", code.bright_yellow().bold(), link.cyan());
            Ok(())
        }
        Resolution::NotFound => {
            println!("{} {}", "Not found:".yellow().bold(), code);
            Ok(())
        }
        Resolution::BadRequest => anyhow::bail!("A short code is required"),
        Resolution::Unavailable => anyhow::bail!("Mapping store unavailable"),
    }
}

async fn handle_ping(config: &Config) -> Result<()> {
    let store = build_store(config).await?;

    if store.health_check().await {
        println!("{}", "Store reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer")
    }
}

fn warn_if_memory(config: &Config) {
    if !config.is_redis_enabled() {
        eprintln!(
            "{}",
            "No Redis configured: using a throwaway in-memory store".yellow()
        );
    }
}
