use url::Url;

/// Derives a Markdown filename from a URL
///
/// The URL path is flattened into a single filename: leading and trailing
/// slashes are trimmed, the remaining separators become hyphens, and anything
/// outside `[A-Za-z0-9._-]` is replaced with a hyphen. An empty path (the site
/// root) becomes `index`. When the URL carries a query string it is appended
/// as a `--query` suffix so that `?page=1` and `?page=2` land in different
/// files.
///
/// The path and query are taken in their percent-encoded form, so an escape
/// like `%2B` sanitizes to `-2B` rather than decoding back to `+`.
///
/// Two distinct URLs can still map to the same filename (for example
/// `/a/b` and `/a-b`); the last write wins and this is not treated as an
/// error.
///
/// # Examples
///
/// ```
/// use sitemark::url::derive_filename;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/path/to/page").unwrap();
/// assert_eq!(derive_filename(&url), "path-to-page.md");
///
/// let root = Url::parse("https://example.com/").unwrap();
/// assert_eq!(derive_filename(&root), "index.md");
/// ```
pub fn derive_filename(url: &Url) -> String {
    let path = url.path().trim_matches('/');

    let mut filename = if path.is_empty() {
        "index".to_string()
    } else {
        sanitize(&path.replace('/', "-"), &[])
    };

    // An all-punctuation path can sanitize down to nothing
    if filename.is_empty() {
        filename = "index".to_string();
    }

    if let Some(query) = url.query() {
        let query_safe = sanitize(query, &['=', '&']);
        if !query_safe.is_empty() {
            filename.push_str("--");
            filename.push_str(&query_safe);
        }
    }

    if !filename.ends_with(".md") {
        filename.push_str(".md");
    }

    filename
}

/// Replaces unsafe characters with hyphens, collapsing runs and trimming ends
///
/// Alphanumerics, `-`, `_` and `.` are always kept; `extra` allows additional
/// characters through (used for `=` and `&` in query strings).
fn sanitize(input: &str, extra: &[char]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_hyphen = false;

    for c in input.chars() {
        let keep = c.is_ascii_alphanumeric() || c == '_' || c == '.' || extra.contains(&c);
        if keep {
            out.push(c);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            out.push('-');
            last_was_hyphen = true;
        }
    }

    out.trim_matches('-').to_string()
}
