// src/config.rs
// =============================================================================
// Scraper configuration.
//
// Every field has a default, so a config file only needs to name the values
// it overrides:
//
//   { "timeout_secs": 30, "container_selectors": ["#docs", "article"] }
// =============================================================================

use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Extensions of assets that are never worth crawling
pub const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".zip", ".rar", ".7z", ".tar",
    ".gz", ".tgz", ".bz2", ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".svg", ".webp", ".ico",
    ".tif", ".tiff", ".mp3", ".wav", ".ogg", ".mp4", ".avi", ".mov", ".mkv", ".webm", ".exe",
    ".dmg", ".msi", ".apk", ".iso", ".bin", ".css", ".js", ".json", ".xml", ".rss", ".woff",
    ".woff2", ".ttf", ".eot",
];

/// Content containers, most specific first
pub const DEFAULT_CONTAINER_SELECTORS: &[&str] = &["article", "main", "[class*=\"content\"]"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Maximum number of redirects followed per request
    pub max_redirects: usize,

    /// Lowercase extensions (with leading dot) rejected during discovery
    pub ignored_extensions: HashSet<String>,

    /// CSS selectors tried in order to find the content container
    pub container_selectors: Vec<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            user_agent: format!("site-scraper/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
            ignored_extensions: DEFAULT_IGNORED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            container_selectors: DEFAULT_CONTAINER_SELECTORS
                .iter()
                .map(|sel| sel.to_string())
                .collect(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| ScrapeError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    // Extensions are compared against lowercased URLs, so "PDF" and "pdf"
    // in a config file both mean ".pdf"
    fn normalized(mut self) -> Self {
        self.ignored_extensions = self
            .ignored_extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.trim().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .filter(|ext| ext.len() > 1)
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.ignored_extensions.contains(".pdf"));
        assert!(config.ignored_extensions.contains(".zip"));
        assert_eq!(
            config.container_selectors,
            vec!["article", "main", "[class*=\"content\"]"]
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScraperConfig::from_json(r#"{ "timeout_secs": 5 }"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_redirects, 10);
        assert!(config.ignored_extensions.contains(".png"));
    }

    #[test]
    fn test_extensions_are_normalized() {
        let config =
            ScraperConfig::from_json(r#"{ "ignored_extensions": ["PDF", ".Epub", " "] }"#)
                .unwrap();
        let mut exts: Vec<_> = config.ignored_extensions.into_iter().collect();
        exts.sort();
        assert_eq!(exts, vec![".epub", ".pdf"]);
    }

    #[test]
    fn test_invalid_json() {
        let result = ScraperConfig::from_json("{ not json");
        assert!(matches!(result, Err(ScrapeError::Config(_))));
    }
}
