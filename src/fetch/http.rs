// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP with reqwest.
//
// Key functionality:
// - One Client for the lifetime of the scraper (connection pooling)
// - Bounded timeout and redirect limit from ScraperConfig
// - Reads the body only for successful HTML responses
// - Sorts reqwest errors into FetchError variants
// =============================================================================

use super::{parse_media_type, FetchedPage, Fetcher};
use crate::config::ScraperConfig;
use crate::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

/// Fetcher backed by a shared reqwest Client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from the timeout, user agent and redirect
    // settings in the config
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await.map_err(categorize_error)?;

        let status = response.status();
        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(parse_media_type);

        debug!(url, status = status.as_u16(), media_type = ?media_type, "fetched");

        let mut page = FetchedPage {
            status: status.as_u16(),
            media_type,
            body: String::new(),
        };

        // Non-HTML and error bodies are never looked at, don't download them
        if page.is_success() && page.is_html() {
            page.body = response.text().await.map_err(categorize_error)?;
        }

        Ok(page)
    }
}

// Categorizes different error types from reqwest
fn categorize_error(error: reqwest::Error) -> FetchError {
    let error_string = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        FetchError::Connect(error_string)
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        FetchError::Tls(error_string)
    } else {
        FetchError::Other(error_string)
    }
}
