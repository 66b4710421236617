//! Web page source
//!
//! Fetches a page and keeps only the text of its `<p>` elements. The page
//! is parsed as HTML5, so unclosed paragraphs, script bodies and character
//! references behave the way a browser would treat them.

use std::time::Duration;

use scraper::{Html, Selector};
use tracing::debug;

use super::TextSource;
use crate::config::DEFAULT_HTTP_TIMEOUT_SECS;
use crate::error::{Result, TldrError};
use crate::types::TextUnit;

/// Blocking HTTP GET of a single page
#[derive(Debug, Clone)]
pub struct WebSource {
    url: String,
    timeout: Duration,
}

impl WebSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn fetch(&self) -> Result<String> {
        let http_err = |source: reqwest::Error| TldrError::Http {
            url: self.url.clone(),
            source,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(http_err)?;
        let response = client.get(&self.url).send().map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TldrError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(http_err)
    }
}

impl TextSource for WebSource {
    fn units(&mut self) -> Result<Vec<TextUnit>> {
        let html = self.fetch()?;
        let text = paragraph_text(&html);
        debug!(url = %self.url, html_bytes = html.len(), text_bytes = text.len(), "page fetched");
        Ok(vec![TextUnit::document(text)])
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Text of every `<p>` element. Paragraphs are separated by a blank line so
/// a paragraph without closing punctuation never runs into the next.
pub fn paragraph_text(html: &str) -> String {
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };
    Html::parse_document(html)
        .select(&selector)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
