//! Crawler module for page fetching and crawl orchestration
//!
//! This module contains the core crawling logic, including:
//! - The depth-first frontier and visited set
//! - HTTP fetching with error classification
//! - Content extraction and Markdown conversion
//! - Overall crawl coordination

mod coordinator;
mod extract;
mod fetcher;
mod frontier;

pub use coordinator::{crawl, Coordinator};
pub use extract::{extract_page, ExtractError, PageResult};
pub use fetcher::{build_http_client, FetchError, HttpFetcher};
pub use frontier::{CrawlTask, Frontier, VisitedSet};
