//! Output module: Markdown file writing and run statistics

mod stats;
mod writer;

pub use stats::{print_summary, CrawlStats};
pub use writer::write_page;
