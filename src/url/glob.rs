/// Checks if a string matches a glob-style pattern
///
/// The only metacharacter is `*`, which matches any run of characters
/// (including the empty run). Everything else matches literally and
/// case-sensitively. Patterns are matched against full URL strings, so
/// `*example.com/docs/*` accepts any URL whose text contains
/// `example.com/docs/` with anything before and after.
///
/// # Examples
///
/// ```
/// use sitemark::url::matches_glob;
///
/// assert!(matches_glob("*", "https://example.com/anything"));
/// assert!(matches_glob(
///     "*figma.com/plugin-docs/*",
///     "https://www.figma.com/plugin-docs/intro"
/// ));
/// assert!(!matches_glob(
///     "*figma.com/plugin-docs/*",
///     "https://www.figma.com/blog/post"
/// ));
/// ```
pub fn matches_glob(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();

    let mut pi = 0;
    let mut ti = 0;
    // Position of the last `*` seen and the text index it was tried at,
    // for backtracking when a literal run fails further on.
    let mut star: Option<usize> = None;
    let mut star_ti = 0;

    while ti < t.len() {
        if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            star_ti = ti;
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some(s) = star {
            // Let the star swallow one more character and retry
            pi = s + 1;
            star_ti += 1;
            ti = star_ti;
        } else {
            return false;
        }
    }

    // Trailing stars match the empty run
    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }

    pi == p.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_matches_everything() {
        assert!(matches_glob("*", ""));
        assert!(matches_glob("*", "https://example.com/anything?q=1"));
    }

    #[test]
    fn test_exact_match() {
        assert!(matches_glob("https://example.com/", "https://example.com/"));
        assert!(!matches_glob("https://example.com/", "https://example.com/x"));
    }

    #[test]
    fn test_prefix_pattern() {
        assert!(matches_glob("https://example.com/docs/*", "https://example.com/docs/intro"));
        assert!(!matches_glob("https://example.com/docs/*", "https://example.com/blog/post"));
    }

    #[test]
    fn test_surrounding_stars() {
        let pattern = "*figma.com/plugin-docs/*";
        assert!(matches_glob(pattern, "https://www.figma.com/plugin-docs/"));
        assert!(matches_glob(pattern, "https://www.figma.com/plugin-docs/api/intro"));
        assert!(!matches_glob(pattern, "https://www.figma.com/community"));
    }

    #[test]
    fn test_star_matches_empty_run() {
        assert!(matches_glob("a*b", "ab"));
        assert!(matches_glob("a*b", "axyzb"));
        assert!(!matches_glob("a*b", "axyz"));
    }

    #[test]
    fn test_multiple_stars() {
        assert!(matches_glob("*/docs/*/api/*", "https://x.com/docs/v2/api/nodes"));
        assert!(!matches_glob("*/docs/*/api/*", "https://x.com/docs/nodes"));
    }

    #[test]
    fn test_backtracking() {
        // The first candidate match for the star must be abandoned
        assert!(matches_glob("*ab", "aab"));
        assert!(matches_glob("*aba", "ababa"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches_glob("*Example*", "https://example.com/"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(matches_glob("", ""));
        assert!(!matches_glob("", "x"));
    }
}
