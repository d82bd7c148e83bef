// src/normalize.rs
// =============================================================================
// URL validation and normalization.
//
// A discovered href goes through these steps, in order:
// 1. trim + lowercase
// 2. reject empty, "/", "#...", "mailto:...", "tel:..."
// 3. reject ignored file extensions (.pdf, .png, ...)
// 4. rewrite root-relative "/path" to "{scheme}://{host}/path"
// 5. reject anything that does not start with the root URL string
// 6. strip the query string and the fragment
//
// Step 4 uses the root's scheme and host only, so a root with a non-default
// port never matches its own root-relative links. Step 5 is a plain prefix
// test: "https://x.com/docs" accepts "https://x.com/docs-old".
// =============================================================================

use crate::error::{Result, ScrapeError};
use std::collections::HashSet;
use url::Url;

// Checks that a caller-supplied URL is non-blank, absolute and has a host
pub fn validate_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::InvalidArgument("URL must not be blank".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| ScrapeError::InvalidArgument(format!("'{}': {}", trimmed, e)))?;

    if url.host_str().is_none() {
        return Err(ScrapeError::InvalidArgument(format!(
            "'{}' has no host",
            trimmed
        )));
    }

    Ok(url)
}

/// The root of a crawl: what discovered links are compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlScope {
    /// Trimmed, lowercased root URL, also the in-scope prefix
    prefix: String,
    scheme: String,
    host: String,
}

impl CrawlScope {
    // Validates the root URL and captures its scheme and host
    //
    // Scheme and host come from the prefix text, not from the parsed Url,
    // which rewrites hosts (punycode, "127.1" -> "127.0.0.1")
    pub fn new(root_url: &str) -> Result<Self> {
        let url = validate_url(root_url)?;
        let prefix = root_url.trim().to_lowercase();

        let (scheme, host) = match split_scheme_host(&prefix) {
            Some((scheme, host)) => (scheme.to_string(), host.to_string()),
            None => (
                url.scheme().to_string(),
                url.host_str().unwrap_or_default().to_lowercase(),
            ),
        };

        Ok(Self {
            prefix,
            scheme,
            host,
        })
    }

    /// The normalized root URL
    pub fn root(&self) -> &str {
        &self.prefix
    }

    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }
}

// Normalizes an href found on a page
//
// Returns: Some(normalized_url) or None when the link must be skipped
//
// Examples (root = "https://x.com"):
//   "/a/b"                 -> Some("https://x.com/a/b")
//   "HTTPS://X.COM/A?q=1"  -> Some("https://x.com/a")
//   "mailto:me@x.com"      -> None
//   "https://other.com/"   -> None
pub fn normalize_link(
    href: &str,
    scope: &CrawlScope,
    ignored_extensions: &HashSet<String>,
) -> Option<String> {
    let link = href.trim().to_lowercase();

    if link.is_empty()
        || link == "/"
        || link.starts_with('#')
        || link.starts_with("mailto:")
        || link.starts_with("tel:")
    {
        return None;
    }

    if let Some(ext) = file_extension(&link) {
        if ignored_extensions.contains(ext) {
            return None;
        }
    }

    let absolute = if link.starts_with('/') {
        format!("{}://{}{}", scope.scheme, scope.host, link)
    } else {
        link
    };

    if !scope.contains(&absolute) {
        return None;
    }

    let without_query = strip_from(&absolute, '?');
    Some(strip_from(without_query, '#').to_string())
}

// Splits "scheme://[user@]host[:port]/..." into (scheme, host), port dropped
//
// "https://bücher.de:8443/docs" -> ("https", "bücher.de")
// "http://[::1]:8080"           -> ("http", "[::1]")
fn split_scheme_host(url: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = url.split_once("://")?;
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host_port = match authority.rfind('@') {
        Some(idx) => &authority[idx + 1..],
        None => authority,
    };

    let host = match host_port.rfind(':') {
        // A colon inside "[...]" belongs to an IPv6 address, not a port
        Some(idx) if !host_port[idx..].contains(']') => &host_port[..idx],
        _ => host_port,
    };

    if scheme.is_empty() || host.is_empty() {
        return None;
    }
    Some((scheme, host))
}

// Cuts `s` at the first `marker`, unless the marker is the first character
fn strip_from(s: &str, marker: char) -> &str {
    match s.find(marker) {
        Some(idx) if idx > 0 => &s[..idx],
        _ => s,
    }
}

// Returns the extension of the last path segment, dot included
//
// "https://x.com/files/report.pdf?dl=1" -> Some(".pdf")
// "https://x.com/docs/"                 -> None
fn file_extension(link: &str) -> Option<&str> {
    let path_end = link.find(['?', '#']).unwrap_or(link.len());
    let path = &link[..path_end];
    let segment = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    segment.rfind('.').map(|idx| &segment[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScraperConfig;

    fn scope(root: &str) -> CrawlScope {
        CrawlScope::new(root).unwrap()
    }

    fn normalize(href: &str, root: &str) -> Option<String> {
        let config = ScraperConfig::default();
        normalize_link(href, &scope(root), &config.ignored_extensions)
    }

    #[test]
    fn test_validate_blank_url() {
        assert!(matches!(
            validate_url("   "),
            Err(ScrapeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_relative_url() {
        assert!(matches!(
            validate_url("/just/a/path"),
            Err(ScrapeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_url_without_host() {
        assert!(matches!(
            validate_url("mailto:someone@example.com"),
            Err(ScrapeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_scope_root_is_trimmed_and_lowercased() {
        assert_eq!(scope("  HTTPS://Example.com/Docs ").root(), "https://example.com/docs");
    }

    #[test]
    fn test_root_relative_link() {
        assert_eq!(
            normalize("/a/b", "https://x.com"),
            Some("https://x.com/a/b".to_string())
        );
    }

    #[test]
    fn test_lowercases_and_strips_query_and_fragment() {
        assert_eq!(
            normalize("  HTTPS://X.COM/Guide?page=2#Intro ", "https://x.com"),
            Some("https://x.com/guide".to_string())
        );
        assert_eq!(
            normalize("/guide#intro?x", "https://x.com"),
            Some("https://x.com/guide".to_string())
        );
    }

    #[test]
    fn test_rejects_special_links() {
        for href in ["", "  ", "/", "#top", "mailto:a@x.com", "TEL:+123", "Mailto:b@x.com"] {
            assert_eq!(normalize(href, "https://x.com"), None, "href {:?}", href);
        }
    }

    #[test]
    fn test_rejects_ignored_extensions() {
        assert_eq!(normalize("/files/report.PDF", "https://x.com"), None);
        assert_eq!(normalize("https://x.com/img/logo.png?v=3", "https://x.com"), None);
        assert_eq!(normalize("/archive.zip", "https://x.com"), None);
    }

    #[test]
    fn test_keeps_document_extensions() {
        assert_eq!(
            normalize("/index.html", "https://x.com"),
            Some("https://x.com/index.html".to_string())
        );
    }

    #[test]
    fn test_rejects_out_of_scope() {
        assert_eq!(normalize("https://other.com/a", "https://x.com"), None);
        assert_eq!(normalize("/blog/post", "https://x.com/docs"), None);
        // Relative paths are never rewritten, so they never match the root
        assert_eq!(normalize("page.html", "https://x.com"), None);
    }

    #[test]
    fn test_prefix_scope_is_not_segment_aware() {
        assert_eq!(
            normalize("/docs-old/intro", "https://x.com/docs"),
            Some("https://x.com/docs-old/intro".to_string())
        );
    }

    #[test]
    fn test_root_port_is_dropped_for_root_relative_links() {
        assert_eq!(normalize("/a", "http://localhost:8080"), None);
        assert_eq!(
            normalize("http://localhost:8080/a", "http://localhost:8080"),
            Some("http://localhost:8080/a".to_string())
        );
    }

    #[test]
    fn test_internationalized_root_keeps_its_host_form() {
        assert_eq!(
            normalize("/a", "https://bücher.de"),
            Some("https://bücher.de/a".to_string())
        );
        // The url crate would spell this host "127.0.0.1"
        assert_eq!(
            normalize("/docs/a", "http://127.1/docs"),
            Some("http://127.1/docs/a".to_string())
        );
        // Port is still dropped
        assert_eq!(normalize("/a", "https://bücher.de:8443"), None);
    }

    #[test]
    fn test_split_scheme_host() {
        assert_eq!(
            split_scheme_host("https://bücher.de:8443/docs"),
            Some(("https", "bücher.de"))
        );
        assert_eq!(split_scheme_host("http://[::1]:8080"), Some(("http", "[::1]")));
        assert_eq!(split_scheme_host("http://[::1]/x"), Some(("http", "[::1]")));
        assert_eq!(split_scheme_host("https://me@x.com?q"), Some(("https", "x.com")));
        assert_eq!(split_scheme_host("mailto:a@b.c"), None);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for href in ["/A/B?x=1", "HTTPS://X.COM/Docs#top", "https://x.com/p.html"] {
            let once = normalize(href, "https://x.com").unwrap();
            let twice = normalize(&once, "https://x.com").unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("https://x.com/a/b.pdf"), Some(".pdf"));
        assert_eq!(file_extension("https://x.com/a/b.tar.gz#x"), Some(".gz"));
        assert_eq!(file_extension("https://x.com/a/"), None);
        assert_eq!(file_extension("/readme"), None);
    }
}
