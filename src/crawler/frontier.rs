//! Frontier and visited-set state for the crawl loop
//!
//! Both structures are owned exclusively by the [`Coordinator`]; fetch
//! workers never touch them, which keeps all frontier mutation on a single
//! task.
//!
//! [`Coordinator`]: crate::crawler::Coordinator

use std::collections::HashSet;
use url::Url;

/// A unit of pending work: a normalized URL and its discovery depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    /// Normalized URL to fetch
    pub url: Url,

    /// Distance in links from the root URL (root = 0)
    pub depth: u32,
}

/// LIFO work list of pending crawl tasks
///
/// Popping the most recently pushed task gives depth-first traversal. Sibling
/// links are pushed in the order the page reports them, so the last-listed
/// sibling is visited first.
#[derive(Debug, Default)]
pub struct Frontier {
    stack: Vec<CrawlTask>,
}

impl Frontier {
    /// Creates a frontier seeded with the root task at depth 0
    pub fn seeded(root_url: Url) -> Self {
        Self {
            stack: vec![CrawlTask {
                url: root_url,
                depth: 0,
            }],
        }
    }

    pub fn push(&mut self, task: CrawlTask) {
        self.stack.push(task);
    }

    pub fn pop(&mut self) -> Option<CrawlTask> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Set of normalized URLs that have already been scheduled for fetching
///
/// Grows monotonically over the lifetime of a run; never shrinks.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL as visited, returning true if it was not seen before
    pub fn insert(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_string())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(url: &str, depth: u32) -> CrawlTask {
        CrawlTask {
            url: Url::parse(url).unwrap(),
            depth,
        }
    }

    #[test]
    fn test_seeded_frontier_holds_root_at_depth_zero() {
        let mut frontier = Frontier::seeded(Url::parse("https://example.com/").unwrap());
        let root = frontier.pop().unwrap();
        assert_eq!(root.depth, 0);
        assert_eq!(root.url.as_str(), "https://example.com/");
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        let mut frontier = Frontier::default();
        frontier.push(task("https://example.com/a", 1));
        frontier.push(task("https://example.com/b", 1));
        frontier.push(task("https://example.com/c", 1));

        assert_eq!(frontier.pop().unwrap().url.path(), "/c");
        assert_eq!(frontier.pop().unwrap().url.path(), "/b");
        assert_eq!(frontier.pop().unwrap().url.path(), "/a");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_frontier_len() {
        let mut frontier = Frontier::default();
        assert!(frontier.is_empty());
        frontier.push(task("https://example.com/a", 1));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_visited_insert_reports_new() {
        let mut visited = VisitedSet::new();
        let url = Url::parse("https://example.com/page").unwrap();

        assert!(visited.insert(&url));
        assert!(!visited.insert(&url));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_visited_contains() {
        let mut visited = VisitedSet::new();
        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b").unwrap();

        visited.insert(&a);
        assert!(visited.contains(&a));
        assert!(!visited.contains(&b));
    }
}
