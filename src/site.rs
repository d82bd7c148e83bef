// src/site.rs
// =============================================================================
// SiteScraper: the public entry point.
//
// One SiteScraper holds one Fetcher (and so one connection pool), the
// configuration and the compiled CSS selectors. It can serve any number of
// crawls and extractions, concurrently; each call owns its own state.
//
//   let scraper = SiteScraper::new(ScraperConfig::default())?;
//   let mut links = scraper.discover_links("https://example.com", 2, token)?;
//   while let Some(url) = links.next().await { ... }
// =============================================================================

use crate::config::ScraperConfig;
use crate::crawl::{LinkExtractor, LinkStream, Traversal};
use crate::error::{Result, ScrapeError};
use crate::extract::{ContentExtractor, PageDetails};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::normalize::{validate_url, CrawlScope};
use std::collections::HashSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Clone)]
pub struct SiteScraper {
    fetcher: Arc<dyn Fetcher>,
    links: Arc<LinkExtractor>,
    content: Arc<ContentExtractor>,
    ignored_extensions: Arc<HashSet<String>>,
}

impl SiteScraper {
    /// Creates a scraper that fetches over HTTP
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(Arc::new(fetcher), config)
    }

    /// Creates a scraper on top of any transport
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, config: ScraperConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            links: Arc::new(LinkExtractor::new()?),
            content: Arc::new(ContentExtractor::new(&config.container_selectors)?),
            ignored_extensions: Arc::new(config.ignored_extensions),
        })
    }

    // Discovers in-scope links reachable from `root_url`
    //
    // Returns: a stream that yields the normalized root first, then every
    // new in-scope link in the order it was found. The stream ends when the
    // depth limit is exhausted or `cancel` fires.
    //
    // Errors: InvalidArgument when `root_url` is blank or not absolute.
    // Nothing that happens during the crawl itself is an error.
    pub fn discover_links(
        &self,
        root_url: &str,
        depth: usize,
        cancel: CancellationToken,
    ) -> Result<LinkStream> {
        let scope = CrawlScope::new(root_url)?;

        let traversal = Traversal::new(
            self.fetcher.clone(),
            self.links.clone(),
            self.ignored_extensions.clone(),
            scope,
            depth,
            cancel,
        );

        Ok(traversal.into_stream())
    }

    // Fetches `url` and renders it as PageDetails
    //
    // Errors:
    //   InvalidArgument - blank or invalid URL
    //   Transport       - the request failed before a response arrived
    //   FetchFailed     - non-2xx status
    //   Cancelled       - `cancel` fired while fetching
    pub async fn extract_content(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<PageDetails> {
        validate_url(url)?;
        let url = url.trim();

        let page = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ScrapeError::Cancelled),
            page = self.fetcher.fetch(url) => page?,
        };

        if !page.is_success() {
            return Err(ScrapeError::FetchFailed {
                status: page.status,
            });
        }

        if !page.is_html() {
            debug!(url, media_type = ?page.media_type, "not HTML, skipping content");
            return Ok(PageDetails::without_content(url));
        }

        Ok(self.content.extract(url, &page.body))
    }
}
