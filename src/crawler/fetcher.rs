//! HTTP fetching for the crawler
//!
//! This module owns the reqwest client configuration and the per-page fetch
//! path: GET the URL, reject non-success statuses and non-HTML bodies, then
//! hand the document to the extraction layer for Markdown conversion and
//! link discovery.

use crate::crawler::extract::{extract_page, ExtractError, PageResult};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Per-page fetch failure
///
/// Every variant is recoverable at the run level: the page is logged and
/// skipped, and the crawl continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status}")]
    Http { status: u16 },

    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    #[error("Not an HTML page (content-type: {content_type})")]
    NotHtml { content_type: String },

    #[error("Failed to read response body: {0}")]
    Body(reqwest::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Builds the HTTP client used for all page fetches
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+https://crates.io/crates/{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_NAME"),
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages and turns them into [`PageResult`]s
///
/// Holds the shared HTTP client and the optional selector list; each call is
/// independent, so one fetcher can serve any number of concurrent fetches.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    selectors: Option<String>,
}

impl HttpFetcher {
    pub fn new(client: Client, selectors: Option<String>) -> Self {
        Self { client, selectors }
    }

    /// Fetches one page and extracts its Markdown content and outbound links
    ///
    /// Links are always extracted from the full document; the selector list
    /// only restricts the converted content.
    pub async fn fetch_page(&self, url: &Url) -> Result<PageResult, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        // A missing Content-Type is accepted; an explicit non-HTML one is not
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.is_empty() && !content_type.contains("text/html") {
            return Err(FetchError::NotHtml { content_type });
        }

        let body = response.text().await.map_err(FetchError::Body)?;

        let page = extract_page(&body, url, self.selectors.as_deref())?;
        Ok(page)
    }
}

/// Classifies a reqwest error into the fetch error taxonomy
fn classify_request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Connect(e.to_string())
    } else {
        FetchError::Request(e)
    }
}
