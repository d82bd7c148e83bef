// src/crawl/queue.rs
// =============================================================================
// Breadth-first link discovery.
//
// How it works:
// 1. Yield the root URL
// 2. Start with (root, depth 1) in a queue
// 3. Fetch the page at the front of the queue
// 4. Yield every in-scope link not seen before, in the order found
// 5. Queue those links too, if they are still inside the depth limit
// 6. Repeat until the queue is empty or the crawl is cancelled
//
// The crawl is lazy: a page is only fetched when the consumer asks for the
// next link and nothing found so far is left to hand out. Pages that fail
// to load, are not HTML or return a non-2xx status are skipped.
//
// Depth: the root is depth 1, and a page at depth d has its links followed
// only while d + 1 < max_depth. So max_depth = 2 fetches just the root.
// =============================================================================

use super::links::LinkExtractor;
use crate::fetch::Fetcher;
use crate::normalize::CrawlScope;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Lazily produced, discovery-ordered stream of in-scope URLs
pub type LinkStream = BoxStream<'static, String>;

// A page waiting to be crawled
#[derive(Debug, Clone)]
struct LinkCandidate {
    url: String,
    depth: usize, // 1 = the root
}

// Everything one crawl owns. Dropped together with the stream.
pub(crate) struct Traversal {
    fetcher: Arc<dyn Fetcher>,
    links: Arc<LinkExtractor>,
    ignored_extensions: Arc<HashSet<String>>,
    scope: CrawlScope,
    max_depth: usize,
    queue: VecDeque<LinkCandidate>,
    visited: HashSet<String>,
    // Found but not yet handed to the consumer
    ready: VecDeque<String>,
    cancel: CancellationToken,
}

impl Traversal {
    pub(crate) fn new(
        fetcher: Arc<dyn Fetcher>,
        links: Arc<LinkExtractor>,
        ignored_extensions: Arc<HashSet<String>>,
        scope: CrawlScope,
        max_depth: usize,
        cancel: CancellationToken,
    ) -> Self {
        let root = scope.root().to_string();

        let mut queue = VecDeque::new();
        if max_depth >= 2 {
            queue.push_back(LinkCandidate {
                url: root.clone(),
                depth: 1,
            });
        }

        let mut visited = HashSet::new();
        visited.insert(root);

        Self {
            fetcher,
            links,
            ignored_extensions,
            scope,
            max_depth,
            queue,
            visited,
            ready: VecDeque::new(),
            cancel,
        }
    }

    /// Turns the traversal into a stream: the root first, then discoveries
    pub(crate) fn into_stream(self) -> LinkStream {
        let root = self.scope.root().to_string();
        info!(root = %root, max_depth = self.max_depth, "starting link discovery");

        stream::once(async move { root })
            .chain(stream::unfold(self, |mut traversal| async move {
                let next = traversal.next_link().await;
                next.map(|url| (url, traversal))
            }))
            .boxed()
    }

    // Returns the next discovered link, or None when the crawl is over
    async fn next_link(&mut self) -> Option<String> {
        loop {
            if self.cancel.is_cancelled() {
                debug!(root = %self.scope.root(), "link discovery cancelled");
                return None;
            }

            if let Some(url) = self.ready.pop_front() {
                return Some(url);
            }

            let Some(candidate) = self.queue.pop_front() else {
                info!(
                    root = %self.scope.root(),
                    found = self.visited.len(),
                    "link discovery finished"
                );
                return None;
            };

            self.crawl(candidate).await;
        }
    }

    // Fetches one page and records what it links to
    async fn crawl(&mut self, candidate: LinkCandidate) {
        debug!(url = %candidate.url, depth = candidate.depth, "crawling");

        let fetched = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return,
            fetched = self.fetcher.fetch(&candidate.url) => fetched,
        };

        let page = match fetched {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %candidate.url, error = %e, "skipping page");
                return;
            }
        };

        if !page.is_success() {
            debug!(url = %candidate.url, status = page.status, "skipping non-success page");
            return;
        }
        if !page.is_html() {
            debug!(url = %candidate.url, media_type = ?page.media_type, "skipping non-HTML page");
            return;
        }

        let found = self
            .links
            .extract(&page.body, &self.scope, &self.ignored_extensions);

        for link in found {
            if !self.visited.insert(link.clone()) {
                continue;
            }

            if candidate.depth + 1 < self.max_depth {
                self.queue.push_back(LinkCandidate {
                    url: link.clone(),
                    depth: candidate.depth + 1,
                });
            }
            self.ready.push_back(link);
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why stream::once(...).chain(stream::unfold(...))?
//    - once() hands out the root even if the token is already cancelled
//    - unfold() threads the Traversal through each poll, so the queue and
//      the visited set live inside the stream and nowhere else
//
// 2. Why tokio::select! with `biased`?
//    - The cancellation branch is checked first on every poll
//    - A slow fetch is dropped as soon as the token fires
//
// 3. Why is nothing parsed across an .await?
//    - scraper::Html is not Send; extract() parses and drops it in one
//      synchronous call, so the stream stays Send and can be boxed
// -----------------------------------------------------------------------------
