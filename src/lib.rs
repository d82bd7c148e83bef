// src/lib.rs
// =============================================================================
// site-scraper: discover in-scope links on a website and turn HTML pages
// into markdown-like text.
//
// Modules:
// - normalize: URL validation and the link normalization rules
// - crawl:     breadth-first link discovery as a lazy Stream
// - extract:   PageDetails and the HTML-to-markdown renderer
// - fetch:     the Fetcher trait and its reqwest implementation
// - site:      SiteScraper, which ties the above together
// - config:    ScraperConfig (defaults + JSON file loading)
// - error:     ScrapeError and FetchError
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
mod site;

pub use config::ScraperConfig;
pub use crawl::{LinkStream, DEFAULT_DEPTH};
pub use error::{FetchError, ScrapeError};
pub use extract::PageDetails;
pub use fetch::{FetchedPage, Fetcher, HttpFetcher};
pub use site::SiteScraper;

// Re-exported so callers don't need a direct tokio-util dependency
pub use tokio_util::sync::CancellationToken;
