// src/crawl/links.rs
// =============================================================================
// Pulls in-scope links out of an HTML page.
//
// Every <a href> is run through normalize_link; rejected hrefs are dropped.
// Order is document order and duplicates are kept, the crawler's visited
// set deals with those.
// =============================================================================

use crate::error::{Result, ScrapeError};
use crate::normalize::{normalize_link, CrawlScope};
use scraper::{Html, Selector};
use std::collections::HashSet;

pub struct LinkExtractor {
    anchors: Selector,
}

impl LinkExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            anchors: compile("a[href]")?,
        })
    }

    // Extracts all in-scope links from HTML content
    //
    // Example (root = "https://example.com"):
    //   html = "<a href='/docs'>Docs</a><a href='mailto:x@y.z'>Mail</a>"
    //   result = ["https://example.com/docs"]
    pub fn extract(
        &self,
        html: &str,
        scope: &CrawlScope,
        ignored_extensions: &HashSet<String>,
    ) -> Vec<String> {
        let document = Html::parse_document(html);

        document
            .select(&self.anchors)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| normalize_link(href, scope, ignored_extensions))
            .collect()
    }
}

pub(crate) fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
