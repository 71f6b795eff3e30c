//! NPR text-edition headline scraper.
//!
//! This module scrapes headlines from [NPR Text](https://text.npr.org), the
//! plain-HTML edition of NPR. Each story on the front page is linked by an
//! anchor like:
//!
//! ```html
//! <a class="topic-title" href="/nx-s1-1234567">Heavy Rain Expected Tomorrow</a>
//! ```
//!
//! The anchor's first child text node is the headline.

use crate::error::Result;
use crate::pipeline::HeadlineSource;
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// Scraper bound to one page URL and marker class.
#[derive(Debug, Clone)]
pub struct NprScraper {
    client: Client,
    url: String,
    marker_class: String,
}

impl NprScraper {
    pub fn new(client: Client, url: impl Into<String>, marker_class: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            marker_class: marker_class.into(),
        }
    }
}

impl HeadlineSource for NprScraper {
    async fn fetch_headlines(&self) -> Result<Vec<String>> {
        fetch_headlines(&self.client, &self.url, &self.marker_class).await
    }
}

/// Fetch the page at `url` and extract its headlines.
///
/// # Errors
///
/// [`HeadlineArtError::Network`](crate::error::HeadlineArtError::Network) if
/// the GET or the body read fails. The body is decoded using the response
/// charset, replacing undecodable bytes, and the HTML parser recovers from
/// malformed markup.
#[instrument(level = "info", skip(client))]
pub async fn fetch_headlines(client: &Client, url: &str, marker_class: &str) -> Result<Vec<String>> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "Source page returned non-success status; parsing anyway");
    }
    let html = response.text().await?;

    let document = Html::parse_document(&html);
    if !document.errors.is_empty() {
        debug!(errors = document.errors.len(), "Recovered from markup errors");
    }

    let headlines = extract_headlines(&document, marker_class);
    info!(count = headlines.len(), source = url, "Extracted headlines");
    debug!(headlines = ?headlines, "NPR headlines");
    Ok(headlines)
}

/// Walk `document` depth-first and collect the first child text of every
/// `<a>` whose `class` is exactly `marker_class`.
///
/// Matched anchors are not descended into. Anchors whose first child is not
/// a text node contribute nothing.
pub fn extract_headlines(document: &Html, marker_class: &str) -> Vec<String> {
    let mut headlines = Vec::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        if let Some(element) = node.value().as_element() {
            if element.name() == "a" && element.attr("class") == Some(marker_class) {
                if let Some(text) = node.first_child().and_then(|c| c.value().as_text()) {
                    headlines.push(text.text.to_string());
                }
                continue;
            }
        }
        // reversed so the leftmost child is popped first
        stack.extend(node.children().rev());
    }

    headlines
}
