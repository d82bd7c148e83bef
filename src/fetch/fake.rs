// src/fetch/fake.rs
// In-memory Fetcher for unit tests.

use super::{FetchedPage, Fetcher, HTML_MEDIA_TYPE};
use crate::error::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
pub(crate) struct FakeFetcher {
    pages: HashMap<String, Result<FetchedPage, FetchError>>,
    fetched: Mutex<Vec<String>>,
    cancel_on: Option<(String, CancellationToken)>,
}

impl FakeFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn html(self, url: &str, body: &str) -> Self {
        self.page(url, 200, Some(HTML_MEDIA_TYPE), body)
    }

    pub(crate) fn page(
        mut self,
        url: &str,
        status: u16,
        media_type: Option<&str>,
        body: &str,
    ) -> Self {
        self.pages.insert(
            url.to_string(),
            Ok(FetchedPage {
                status,
                media_type: media_type.map(str::to_string),
                body: body.to_string(),
            }),
        );
        self
    }

    pub(crate) fn error(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }

    /// Cancels `token` while `url` is being fetched
    pub(crate) fn cancel_on(mut self, url: &str, token: CancellationToken) -> Self {
        self.cancel_on = Some((url.to_string(), token));
        self
    }

    pub(crate) fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.fetched.lock().unwrap().push(url.to_string());

        if let Some((cancel_url, token)) = &self.cancel_on {
            if cancel_url == url {
                token.cancel();
            }
        }

        match self.pages.get(url) {
            Some(result) => result.clone(),
            None => Ok(FetchedPage {
                status: 404,
                media_type: Some(HTML_MEDIA_TYPE.to_string()),
                body: String::new(),
            }),
        }
    }
}
