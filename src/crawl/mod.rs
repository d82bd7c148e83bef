// src/crawl/mod.rs
// =============================================================================
// This module handles link discovery.
//
// Features:
// - Breadth-first crawling starting from a root URL
// - Scope restricted to URLs that start with the root URL
// - Configurable depth limit
// - Lazy, cancellable output stream
//
// Submodules:
// - links: Extracts and normalizes the links of one HTML page
// - queue: The BFS traversal behind the link stream
// =============================================================================

mod links;
mod queue;

pub use queue::LinkStream;

pub(crate) use links::{compile, LinkExtractor};
pub(crate) use queue::Traversal;

/// Default crawl depth: the root plus the links found on it
pub const DEFAULT_DEPTH: usize = 2;
