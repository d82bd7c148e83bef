// src/extract/mod.rs
// =============================================================================
// This module turns one HTML page into PageDetails.
//
// Steps:
// 1. Read title, meta description and meta keywords
// 2. Pick the content container: the first configured selector that
//    matches (article, main, [class*="content"] by default), else the
//    whole document
// 3. Render headings, paragraphs and lists under it as markdown-like text
//
// Submodules:
// - metadata: <title> and <meta> lookups
// - markdown: the block renderer
// =============================================================================

mod markdown;
mod metadata;

pub use markdown::collapse_whitespace;

use crate::crawl::compile;
use crate::error::Result;
use markdown::MarkdownRenderer;
use metadata::MetadataSelectors;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Everything extracted from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDetails {
    /// The URL that was requested
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Markdown-like rendering; None when the resource was not HTML
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PageDetails {
    /// Details of a resource that is not an HTML page
    pub fn without_content(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            description: None,
            keywords: None,
            content: None,
        }
    }
}

/// Compiled selectors for content extraction
pub(crate) struct ContentExtractor {
    metadata: MetadataSelectors,
    containers: Vec<Selector>,
    renderer: MarkdownRenderer,
}

impl ContentExtractor {
    pub(crate) fn new(container_selectors: &[String]) -> Result<Self> {
        let containers = container_selectors
            .iter()
            .map(|selector| compile(selector))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            metadata: MetadataSelectors::new()?,
            containers,
            renderer: MarkdownRenderer::new()?,
        })
    }

    pub(crate) fn extract(&self, url: &str, html: &str) -> PageDetails {
        let document = Html::parse_document(html);
        let metadata = self.metadata.extract(&document);

        let container = self
            .containers
            .iter()
            .find_map(|selector| document.select(selector).next())
            .unwrap_or_else(|| document.root_element());

        PageDetails {
            url: url.to_string(),
            title: metadata.title,
            description: metadata.description,
            keywords: metadata.keywords,
            content: Some(self.renderer.render(container)),
        }
    }
}
