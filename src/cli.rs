// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - links:   breadth-first link discovery from a root URL
// - content: markdown-like rendering of a single page
// =============================================================================

use clap::{Args, Parser, Subcommand};
use site_scraper::DEFAULT_DEPTH;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "site-scraper",
    version,
    about = "Discover in-scope links on a website and extract page content as markdown",
    long_about = "site-scraper crawls a website breadth-first to list the pages under a root URL, \
                  and converts the readable part of an HTML page into markdown-like text."
)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug)]
pub struct GlobalOptions {
    /// JSON config file (see ScraperConfig for the fields)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// User-Agent header (overrides the config file)
    #[arg(long, global = true)]
    pub user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the in-scope links reachable from a URL
    ///
    /// Example: site-scraper links https://example.com/docs --depth 3
    Links {
        /// Root URL; only links starting with it are reported
        url: String,

        /// Crawl depth
        ///
        /// Depth 1 = just the root URL
        /// Depth 2 = the root + the links found on it (no further fetches)
        /// Depth 3 = ... + the links found on those pages
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        /// Print a JSON array once the crawl ends instead of one URL per line
        #[arg(long)]
        json: bool,
    },

    /// Render one page as markdown-like text
    ///
    /// Example: site-scraper content https://example.com/blog/post --json
    Content {
        /// Page URL
        url: String,

        /// Print PageDetails as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_defaults() {
        let cli = Cli::parse_from(["site-scraper", "links", "https://example.com"]);
        match cli.command {
            Commands::Links { url, depth, json } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(depth, 2);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(cli.options.config.is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "site-scraper",
            "content",
            "https://example.com/a",
            "--json",
            "--timeout",
            "5",
            "--user-agent",
            "bot/1.0",
        ]);
        assert_eq!(cli.options.timeout, Some(5));
        assert_eq!(cli.options.user_agent.as_deref(), Some("bot/1.0"));
        assert!(matches!(cli.command, Commands::Content { json: true, .. }));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
