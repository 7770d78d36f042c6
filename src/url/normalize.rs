use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a URL into the canonical form used for dedupe and filtering
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject schemes other than http/https
/// 3. Require a host (the `url` crate lowercases it during parsing)
/// 4. Remove the fragment (everything after #)
/// 5. Remove a trailing slash from the path, except for the root path `/`
///
/// Query strings are preserved; whether a URL with a query is crawled is a
/// filtering decision, not a normalization one.
///
/// # Examples
///
/// ```
/// use sitemark::url::normalize_url;
///
/// let url = normalize_url("https://example.com/page/#section").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(url_str: &str) -> UrlResult<Url> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    let path = url.path();
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/').to_string();
        url.set_path(&trimmed);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_trailing_slash() {
        let result = normalize_url("https://example.com/page/").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_keep_root_slash() {
        let result = normalize_url("https://example.com/").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_empty_path_becomes_root() {
        let result = normalize_url("https://example.com").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_remove_fragment() {
        let result = normalize_url("https://example.com/page#section").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_fragment_only_difference_collapses() {
        let a = normalize_url("https://example.com/page#one").unwrap();
        let b = normalize_url("https://example.com/page#two").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_query_preserved() {
        let result = normalize_url("https://example.com/page?version=2").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page?version=2");
    }

    #[test]
    fn test_lowercase_host() {
        let result = normalize_url("https://EXAMPLE.COM/Page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/Page");
    }

    #[test]
    fn test_http_allowed() {
        let result = normalize_url("http://127.0.0.1:8080/docs").unwrap();
        assert_eq!(result.as_str(), "http://127.0.0.1:8080/docs");
    }

    #[test]
    fn test_invalid_scheme() {
        let result = normalize_url("ftp://example.com/page");
        assert!(matches!(result.unwrap_err(), UrlError::InvalidScheme(_)));
    }

    #[test]
    fn test_malformed_url() {
        let result = normalize_url("not a url");
        assert!(matches!(result.unwrap_err(), UrlError::Parse(_)));
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_url("https://example.com/docs/intro/#install").unwrap();
        let twice = normalize_url(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multiple_trailing_slashes() {
        let result = normalize_url("https://example.com/page///").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }
}
