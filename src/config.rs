//! Run configuration for Sitemark
//!
//! A [`CrawlConfig`] is assembled from command-line arguments, validated once
//! at startup, and immutable for the duration of the run.

use crate::url::normalize_url;
use crate::{ConfigError, ConfigResult};
use scraper::Selector;
use std::path::PathBuf;
use url::Url;

/// Default output directory for Markdown files
pub const DEFAULT_OUTPUT_DIR: &str = "./docs";

/// Default inclusive crawl depth from the root URL
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Default glob pattern (accepts every same-site URL)
pub const DEFAULT_PATTERN: &str = "*";

/// Default number of concurrent page fetches
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Configuration for a single crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Normalized root URL the crawl starts from
    pub root_url: Url,

    /// Directory Markdown files are written into
    pub output_dir: PathBuf,

    /// Maximum link-following depth from the root, inclusive
    pub max_depth: u32,

    /// Optional comma-separated CSS selector list restricting extraction
    pub selectors: Option<String>,

    /// Glob pattern the full URL string must match
    pub pattern: String,

    /// Whether URLs with query strings may be crawled
    pub allow_query: bool,

    /// Maximum number of in-flight page fetches
    pub concurrency: usize,
}

impl CrawlConfig {
    /// Builds and validates a configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the root URL does not parse as an
    /// http(s) URL with a host, the selector list is not valid CSS, or the
    /// concurrency limit is zero. These are all fatal startup errors.
    pub fn new(
        root_url: &str,
        output_dir: PathBuf,
        max_depth: u32,
        selectors: Option<String>,
        pattern: String,
        allow_query: bool,
        concurrency: usize,
    ) -> ConfigResult<Self> {
        let root_url =
            normalize_url(root_url).map_err(|e| ConfigError::InvalidRootUrl(e.to_string()))?;

        if let Some(selectors) = &selectors {
            validate_selectors(selectors)?;
        }

        if concurrency == 0 {
            return Err(ConfigError::Validation(
                "concurrency must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            root_url,
            output_dir,
            max_depth,
            selectors,
            pattern,
            allow_query,
            concurrency,
        })
    }
}

/// Validates a comma-separated CSS selector list
///
/// Parsing here means a bad selector fails the run at startup with a clear
/// message instead of silently extracting nothing on every page.
fn validate_selectors(selectors: &str) -> ConfigResult<()> {
    match Selector::parse(selectors) {
        Ok(_) => Ok(()),
        Err(e) => Err(ConfigError::InvalidSelector {
            selector: selectors.to_string(),
            message: format!("{e:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(root: &str, selectors: Option<&str>, concurrency: usize) -> ConfigResult<CrawlConfig> {
        CrawlConfig::new(
            root,
            PathBuf::from(DEFAULT_OUTPUT_DIR),
            DEFAULT_MAX_DEPTH,
            selectors.map(str::to_string),
            DEFAULT_PATTERN.to_string(),
            false,
            concurrency,
        )
    }

    #[test]
    fn test_valid_config() {
        let config = build("https://example.com/docs/", None, 10).unwrap();
        assert_eq!(config.root_url.as_str(), "https://example.com/docs");
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_root_url_is_normalized() {
        let config = build("https://example.com/docs/#intro", None, 10).unwrap();
        assert_eq!(config.root_url.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_invalid_root_url() {
        let result = build("not a url", None, 10);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidRootUrl(_)));
    }

    #[test]
    fn test_non_http_root_rejected() {
        let result = build("ftp://example.com/", None, 10);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidRootUrl(_)));
    }

    #[test]
    fn test_valid_selector_list() {
        let config = build("https://example.com/", Some("h1, p, article.main"), 10);
        assert!(config.is_ok());
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let result = build("https://example.com/", Some("h1, ???"), 10);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidSelector { .. }
        ));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let result = build("https://example.com/", None, 0);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
