// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Install the tracing subscriber (RUST_LOG, logs go to stderr)
// 2. Parse command-line arguments using clap
// 3. Build the SiteScraper from the config file and CLI overrides
// 4. Dispatch to the subcommand handler; Ctrl-C cancels it
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, GlobalOptions};
use futures::StreamExt;
use site_scraper::{CancellationToken, PageDetails, ScraperConfig, SiteScraper};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("site_scraper=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let scraper = SiteScraper::new(load_config(&cli.options)?)
        .context("failed to create scraper")?;

    // Ctrl-C stops the current operation; output already printed stays
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, stopping");
            on_signal.cancel();
        }
    });

    match cli.command {
        Commands::Links { url, depth, json } => {
            handle_links(&scraper, &url, depth, json, cancel).await
        }
        Commands::Content { url, json } => handle_content(&scraper, &url, json, &cancel).await,
    }
}

// Reads the config file (if any) and applies CLI overrides on top
fn load_config(options: &GlobalOptions) -> Result<ScraperConfig> {
    let mut config = match &options.config {
        Some(path) => ScraperConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScraperConfig::default(),
    };

    if let Some(timeout) = options.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(user_agent) = &options.user_agent {
        config.user_agent = user_agent.clone();
    }

    Ok(config)
}

// Handles the 'links' subcommand
//
// Plain output prints each URL as soon as it is discovered; JSON output
// has to wait for the whole crawl.
async fn handle_links(
    scraper: &SiteScraper,
    url: &str,
    depth: usize,
    json: bool,
    cancel: CancellationToken,
) -> Result<()> {
    let mut links = scraper
        .discover_links(url, depth, cancel)
        .with_context(|| format!("cannot crawl '{}'", url))?;

    let mut found = Vec::new();
    while let Some(link) = links.next().await {
        if !json {
            println!("{}", link);
        }
        found.push(link);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    }

    info!(count = found.len(), "links discovered");
    Ok(())
}

// Handles the 'content' subcommand
async fn handle_content(
    scraper: &SiteScraper,
    url: &str,
    json: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let details = scraper
        .extract_content(url, cancel)
        .await
        .with_context(|| format!("cannot extract '{}'", url))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        print_details(&details);
    }
    Ok(())
}

// Prints PageDetails as a small header followed by the content
fn print_details(details: &PageDetails) {
    println!("URL:         {}", details.url);
    if let Some(title) = &details.title {
        println!("Title:       {}", title);
    }
    if let Some(description) = &details.description {
        println!("Description: {}", description);
    }
    if let Some(keywords) = &details.keywords {
        println!("Keywords:    {}", keywords);
    }
    println!();

    match &details.content {
        Some(content) => print!("{}", content),
        None => println!("(not an HTML page, no content extracted)"),
    }
}
