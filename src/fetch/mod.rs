// src/fetch/mod.rs
// =============================================================================
// The transport layer.
//
// Both the crawler and the content extractor talk to the network through the
// Fetcher trait. The real implementation (HttpFetcher) wraps one pooled
// reqwest::Client; tests swap in an in-memory fake.
//
// Submodules:
// - http: reqwest-backed Fetcher
// =============================================================================

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;

/// The only media type that is parsed as HTML
pub const HTML_MEDIA_TYPE: &str = "text/html";

/// The result of fetching one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Content-Type without parameters, lowercased ("text/html")
    pub media_type: Option<String>,
    /// Response body; empty unless the response is a 2xx HTML page
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_html(&self) -> bool {
        self.media_type.as_deref() == Some(HTML_MEDIA_TYPE)
    }
}

/// Something that can GET a URL
///
/// Implementations must be shareable: one instance serves every crawl and
/// every extraction made through a SiteScraper, possibly concurrently.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

// Reduces a Content-Type header to its media type
//
// "Text/HTML; charset=UTF-8" -> "text/html"
pub fn parse_media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
