//! Run statistics and the end-of-run summary

use std::path::Path;

/// Counters accumulated over one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    /// Pages successfully converted and written to disk
    pub pages_written: u64,

    /// Pages that failed to fetch, convert, or save
    pub pages_failed: u64,

    /// Links discovered on written pages (before filtering)
    pub links_discovered: u64,

    /// Links dropped by normalization or the eligibility filter
    pub links_rejected: u64,

    /// Deepest depth at which a task was dispatched
    pub max_depth_reached: u32,
}

impl CrawlStats {
    /// Records the depth of a dispatched task
    pub fn note_depth(&mut self, depth: u32) {
        if depth > self.max_depth_reached {
            self.max_depth_reached = depth;
        }
    }

    /// Total pages attempted
    pub fn pages_attempted(&self) -> u64 {
        self.pages_written + self.pages_failed
    }
}

/// Prints the end-of-run summary to stdout
pub fn print_summary(stats: &CrawlStats, output_dir: &Path) {
    println!("{}", "-".repeat(50));
    println!("Crawling completed.");
    println!("  Pages written: {}", stats.pages_written);
    if stats.pages_failed > 0 {
        println!("  Pages failed: {}", stats.pages_failed);
    }
    println!(
        "  Links discovered: {} ({} filtered out)",
        stats.links_discovered, stats.links_rejected
    );
    println!("  Deepest page: depth {}", stats.max_depth_reached);
    println!("Files saved to: {}", output_dir.display());
}
