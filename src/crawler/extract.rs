//! Content extraction and Markdown conversion
//!
//! Given a fetched HTML document, this module produces the Markdown text to
//! persist (optionally restricted to a CSS selector list) and the ordered
//! list of outbound links to feed back into the frontier.

use scraper::{Html, Selector};
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

/// Extraction failure for a fetched document
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Markdown conversion failed: {0}")]
    Convert(String),
}

/// The product of fetching and converting one page
#[derive(Debug, Clone)]
pub struct PageResult {
    /// The normalized URL this page was fetched from
    pub url: Url,

    /// Converted Markdown content
    pub markdown: String,

    /// Outbound links in document order, deduplicated within the page
    pub links: Vec<String>,
}

/// Extracts Markdown content and outbound links from an HTML document
///
/// When `selectors` is given, only the matching elements (concatenated in
/// document order) are converted; link extraction always sees the whole
/// document so that navigation outside the selected region is still followed.
pub fn extract_page(
    html: &str,
    url: &Url,
    selectors: Option<&str>,
) -> Result<PageResult, ExtractError> {
    let source = match selectors {
        Some(selectors) => restrict_to_selectors(html, selectors)?,
        None => html.to_string(),
    };

    let markdown = html_to_markdown(&source)?;
    let links = extract_links(html, url);

    Ok(PageResult {
        url: url.clone(),
        markdown,
        links,
    })
}

/// Keeps only the elements matching a comma-separated CSS selector list
///
/// scraper yields each matching element exactly once, in document order, so
/// overlapping selectors in the list cannot duplicate content.
fn restrict_to_selectors(html: &str, selectors: &str) -> Result<String, ExtractError> {
    let selector =
        Selector::parse(selectors).map_err(|e| ExtractError::Selector(format!("{e:?}")))?;

    let document = Html::parse_document(html);
    let fragments: Vec<String> = document
        .select(&selector)
        .map(|element| element.html())
        .collect();

    Ok(fragments.join("\n"))
}

/// Converts an HTML fragment or document to Markdown
fn html_to_markdown(html: &str) -> Result<String, ExtractError> {
    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style"])
        .build();

    converter
        .convert(html)
        .map_err(|e| ExtractError::Convert(e.to_string()))
}

/// Extracts outbound links from an HTML document
///
/// Takes `a[href]` elements without a `download` attribute, skips
/// javascript/mailto/tel/data schemes and same-page anchors, resolves
/// relative hrefs against the page URL, and keeps only http(s) results.
/// Order follows the document; duplicates within one page are dropped.
/// Malformed hrefs are skipped silently.
fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    // Static selector string, cannot fail to parse
    let Ok(anchor) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    let mut seen = HashSet::new();

    for element in document.select(&anchor) {
        if element.value().attr("download").is_some() {
            continue;
        }

        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(absolute) = resolve_link(href, base_url) {
            if seen.insert(absolute.clone()) {
                links.push(absolute);
            }
        }
    }

    links
}

/// Resolves an href to an absolute http(s) URL, or None if it is excluded
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute.to_string())
        }
        _ => None,
    }
}
