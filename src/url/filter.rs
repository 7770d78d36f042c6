use crate::config::CrawlConfig;
use crate::url::matches_glob;
use url::Url;

/// Eligibility policy for discovered URLs
///
/// The filter is built once per run from the configuration and applied to
/// every discovered link. A URL is eligible for crawling only if:
///
/// 1. its host and port equal the root URL's (single-site crawl);
/// 2. its path sits under the root URL's path;
/// 3. the full URL string matches the configured glob pattern;
/// 4. it carries no query string, unless queries are explicitly allowed or
///    the query equals the root URL's own query.
///
/// Modeled as a standalone value rather than a hardcoded check so a run
/// against a different site only needs different configuration.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    host: String,
    port: Option<u16>,
    root_path: String,
    root_query: Option<String>,
    pattern: String,
    allow_query: bool,
}

impl UrlFilter {
    /// Builds a filter from the run configuration
    pub fn from_config(config: &CrawlConfig) -> Self {
        Self {
            host: config
                .root_url
                .host_str()
                .unwrap_or_default()
                .to_string(),
            port: config.root_url.port_or_known_default(),
            root_path: config.root_url.path().to_string(),
            root_query: config.root_url.query().map(str::to_string),
            pattern: config.pattern.clone(),
            allow_query: config.allow_query,
        }
    }

    /// Returns true if the URL should be crawled
    pub fn is_eligible(&self, url: &Url) -> bool {
        if url.host_str() != Some(self.host.as_str()) {
            return false;
        }

        // The port is part of the site identity, so a link to another port
        // on the same hostname is a different site
        if url.port_or_known_default() != self.port {
            return false;
        }

        if !url.path().starts_with(&self.root_path) {
            return false;
        }

        if let Some(query) = url.query() {
            let same_as_root = self.root_query.as_deref() == Some(query);
            if !self.allow_query && !same_as_root {
                return false;
            }
        }

        matches_glob(&self.pattern, url.as_str())
    }
}
