//! Crawl coordination - the main depth-first crawl loop
//!
//! The coordinator owns all mutable crawl state (frontier, visited set,
//! statistics) and is the only task that touches it. Page fetches run
//! concurrently on a [`JoinSet`] bounded by the configured concurrency;
//! completions are consumed one at a time, so the links discovered by one
//! page are always pushed onto the frontier as a single block.
//!
//! [`JoinSet`]: tokio::task::JoinSet

use crate::config::CrawlConfig;
use crate::crawler::extract::PageResult;
use crate::crawler::fetcher::{build_http_client, FetchError, HttpFetcher};
use crate::crawler::frontier::{CrawlTask, Frontier, VisitedSet};
use crate::output::{write_page, CrawlStats};
use crate::url::{derive_filename, normalize_url, UrlFilter};
use crate::{CrawlError, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Main crawl orchestrator
///
/// Constructed per run; holds no process-wide state, so multiple coordinators
/// can run in one process without interfering.
pub struct Coordinator {
    config: Arc<CrawlConfig>,
    filter: UrlFilter,
    fetcher: Arc<HttpFetcher>,
    frontier: Frontier,
    visited: VisitedSet,
    stats: CrawlStats,
}

impl Coordinator {
    /// Creates a coordinator, seeding the frontier with the root URL
    ///
    /// Creates the output directory up front so an unwritable destination
    /// fails the run before any fetch is dispatched.
    pub fn new(config: CrawlConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir)?;

        let client = build_http_client()?;
        let fetcher = Arc::new(HttpFetcher::new(client, config.selectors.clone()));
        let filter = UrlFilter::from_config(&config);
        let frontier = Frontier::seeded(config.root_url.clone());

        Ok(Self {
            config: Arc::new(config),
            filter,
            fetcher,
            frontier,
            visited: VisitedSet::new(),
            stats: CrawlStats::default(),
        })
    }

    /// Runs the crawl to completion and returns the run statistics
    ///
    /// The loop keeps up to `concurrency` fetches in flight, popping tasks in
    /// LIFO order. A page-level failure is logged and counted; only startup
    /// and task-join errors abort the run.
    pub async fn run(&mut self) -> Result<CrawlStats> {
        tracing::info!("Starting crawl from: {}", self.config.root_url);
        tracing::info!("Output directory: {}", self.config.output_dir.display());
        tracing::info!("Max depth: {}", self.config.max_depth);
        if let Some(selectors) = &self.config.selectors {
            tracing::info!("CSS selectors: {}", selectors);
        }

        let start = Instant::now();
        let mut in_flight: JoinSet<(CrawlTask, std::result::Result<PageResult, FetchError>)> =
            JoinSet::new();

        loop {
            // Dispatch until the concurrency budget is spent or the frontier
            // runs dry. Visited is marked at dispatch time, which is what
            // guarantees at-most-one fetch per URL.
            while in_flight.len() < self.config.concurrency {
                let Some(task) = self.frontier.pop() else { break };

                if !self.visited.insert(&task.url) {
                    continue;
                }

                tracing::info!("Crawling (depth {}): {}", task.depth, task.url);
                let fetcher = Arc::clone(&self.fetcher);
                in_flight.spawn(async move {
                    let result = fetcher.fetch_page(&task.url).await;
                    (task, result)
                });
            }

            let Some(joined) = in_flight.join_next().await else {
                // Nothing in flight and nothing dispatchable: done
                break;
            };

            let (task, result) = joined.map_err(CrawlError::Join)?;
            self.stats.note_depth(task.depth);

            match result {
                Ok(page) => self.handle_page(&task, page),
                Err(e) => {
                    tracing::warn!("Failed to crawl {}: {}", task.url, e);
                    self.stats.pages_failed += 1;
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} pages written, {} failed in {:.2?}",
            self.stats.pages_written,
            self.stats.pages_failed,
            start.elapsed()
        );

        Ok(self.stats.clone())
    }

    /// Persists a fetched page and feeds its links back into the frontier
    fn handle_page(&mut self, task: &CrawlTask, page: PageResult) {
        let filename = derive_filename(&page.url);
        let content = format!("# {}\n\n{}\n", page.url, page.markdown);

        match write_page(&self.config.output_dir, &filename, &content) {
            Ok(path) => {
                tracing::info!("Saved: {}", path.display());
                self.stats.pages_written += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", page.url, e);
                self.stats.pages_failed += 1;
            }
        }

        tracing::debug!("Found {} links at depth {}", page.links.len(), task.depth);

        // depth + 1 may not exceed the inclusive maximum; links on max-depth
        // pages are still counted, just never enqueued
        let can_descend = task.depth < self.config.max_depth;

        for link in &page.links {
            self.stats.links_discovered += 1;

            // Malformed discovered links are dropped without noise
            let normalized = match normalize_url(link) {
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!("Skipping malformed link {}: {}", link, e);
                    self.stats.links_rejected += 1;
                    continue;
                }
            };

            if !self.filter.is_eligible(&normalized) {
                tracing::debug!("Filtered out: {}", normalized);
                self.stats.links_rejected += 1;
                continue;
            }

            if self.visited.contains(&normalized) {
                continue;
            }

            if can_descend {
                self.frontier.push(CrawlTask {
                    url: normalized,
                    depth: task.depth + 1,
                });
            }
        }
    }

    /// Returns the statistics accumulated so far
    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }
}

/// Runs a complete crawl with the given configuration
///
/// This is the main library entry point. It drives the crawl to completion
/// and returns the run statistics; per-page failures are absorbed into the
/// statistics rather than surfaced as errors.
pub async fn crawl(config: CrawlConfig) -> Result<CrawlStats> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
