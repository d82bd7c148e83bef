// src/extract/markdown.rs
// =============================================================================
// Renders the readable part of a page as markdown-like text.
//
// Only four kinds of block are kept, wherever they sit under the container:
//
//   <h1>..<h6>   ->  "# Heading" (one '#' per level)
//   <p>          ->  one line: text, [link](href) and ![alt](src) tokens
//   <ul><li>     ->  "- item"
//   <ol><li>     ->  "1. item", numbering restarts for every <ol>
//
// All text has its whitespace collapsed: "  a \n\t b " becomes "a b".
// =============================================================================

use crate::crawl::compile;
use crate::error::Result;
use scraper::{ElementRef, Selector};

pub(crate) struct MarkdownRenderer {
    blocks: Selector,
    list_items: Selector,
}

impl MarkdownRenderer {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            blocks: compile("h1, h2, h3, h4, h5, h6, p, ul, ol")?,
            list_items: compile("li")?,
        })
    }

    // Renders every block element below `container`, in document order
    pub(crate) fn render(&self, container: ElementRef<'_>) -> String {
        let mut out = String::new();

        for block in container.select(&self.blocks) {
            match block.value().name() {
                "p" => {
                    out.push_str(&render_paragraph(block));
                    out.push('\n');
                }
                "ul" => {
                    for item in block.select(&self.list_items) {
                        out.push_str("- ");
                        out.push_str(&collapse_whitespace(&element_text(item)));
                        out.push('\n');
                    }
                }
                "ol" => {
                    for (index, item) in block.select(&self.list_items).enumerate() {
                        out.push_str(&format!(
                            "{}. {}\n",
                            index + 1,
                            collapse_whitespace(&element_text(item))
                        ));
                    }
                }
                name => {
                    if let Some(level) = heading_level(name) {
                        out.push_str(&"#".repeat(level));
                        out.push(' ');
                        out.push_str(&collapse_whitespace(&element_text(block)));
                        out.push('\n');
                    }
                }
            }
        }

        out
    }
}

// Rebuilds a paragraph from its immediate children
fn render_paragraph(paragraph: ElementRef<'_>) -> String {
    let mut line = String::new();

    for child in paragraph.children() {
        let Some(element) = ElementRef::wrap(child) else {
            if let Some(text) = child.value().as_text() {
                line.push_str(&collapse_whitespace(text));
            }
            continue;
        };

        let attrs = element.value();
        match attrs.name() {
            "img" if !attrs.attr("src").unwrap_or_default().is_empty() => {
                // Images sit on a line of their own
                if !line.is_empty() && !line.ends_with('\n') {
                    line.push('\n');
                }
                line.push_str(&format!(
                    "![{}]({})\n",
                    attrs.attr("alt").unwrap_or_default(),
                    attrs.attr("src").unwrap_or_default()
                ));
            }
            "a" if !attrs.attr("href").unwrap_or_default().is_empty() => {
                line.push_str(&format!(
                    "[{}]({})",
                    collapse_whitespace(&element_text(element)),
                    attrs.attr("href").unwrap_or_default()
                ));
            }
            _ => line.push_str(&collapse_whitespace(&element_text(element))),
        }
    }

    line
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn heading_level(name: &str) -> Option<usize> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Trims `text` and turns every run of whitespace into a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
