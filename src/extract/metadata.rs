// src/extract/metadata.rs
// Title, description and keywords of an HTML document.

use crate::crawl::compile;
use crate::error::Result;
use scraper::{Html, Selector};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

pub(crate) struct MetadataSelectors {
    title: Selector,
    description: Selector,
    keywords: Selector,
}

impl MetadataSelectors {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            title: compile("title")?,
            description: compile(r#"meta[name="description"]"#)?,
            keywords: compile(r#"meta[name="keywords"]"#)?,
        })
    }

    pub(crate) fn extract(&self, document: &Html) -> Metadata {
        let title = document
            .select(&self.title)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string());

        Metadata {
            title,
            description: meta_content(document, &self.description),
            keywords: meta_content(document, &self.keywords),
        }
    }
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}
