// src/error.rs
// =============================================================================
// Error types for the library.
//
// Two kinds of failure exist:
// - FetchError: the transport itself failed (timeout, DNS, TLS, ...)
// - ScrapeError: what callers of SiteScraper see
//
// Link discovery is best-effort and never surfaces a FetchError for a
// crawled page. Content extraction is strict and returns them.
// =============================================================================

use thiserror::Error;

/// A failure at the transport layer, before any status code was seen
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Request timed out
    #[error("request timed out")]
    Timeout,
    /// Too many redirects (redirect loop)
    #[error("too many redirects")]
    TooManyRedirects,
    /// Could not connect (DNS failure, refused connection, ...)
    #[error("connection failed: {0}")]
    Connect(String),
    /// SSL/TLS certificate error
    #[error("TLS error: {0}")]
    Tls(String),
    /// Anything else, including a body that could not be read
    #[error("{0}")]
    Other(String),
}

/// Errors returned by SiteScraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Blank or unparseable URL
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server answered with a non-2xx status
    #[error("fetch failed with HTTP {status}")]
    FetchFailed { status: u16 },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(#[from] FetchError),

    /// The caller cancelled the operation
    #[error("operation cancelled")]
    Cancelled,

    /// A configured CSS selector does not parse
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The configuration file could not be loaded
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
