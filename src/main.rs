//! Sitemark main entry point
//!
//! Command-line interface for the Sitemark site-to-Markdown crawler.

use anyhow::Context;
use clap::Parser;
use sitemark::config::{
    CrawlConfig, DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR, DEFAULT_PATTERN,
};
use sitemark::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitemark: crawl a website and save each page as Markdown
///
/// Sitemark walks a single site depth-first starting from the given URL,
/// converts every eligible page to Markdown, and writes one file per page
/// into the output directory.
#[derive(Parser, Debug)]
#[command(name = "sitemark")]
#[command(version)]
#[command(about = "Crawl a website and save each page as Markdown", long_about = None)]
struct Cli {
    /// Root URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Destination directory for Markdown files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Inclusive maximum link-following depth from the root
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Comma-separated CSS selectors restricting extracted content
    #[arg(short, long)]
    selector: Option<String>,

    /// Glob pattern (with `*` wildcards) the full URL must match
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Also crawl URLs that carry query strings
    #[arg(long)]
    allow_query: bool,

    /// Maximum number of concurrent page fetches
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Startup validation: a bad URL or selector aborts with a non-zero exit
    let config = CrawlConfig::new(
        &cli.url,
        cli.output,
        cli.max_depth,
        cli.selector,
        cli.pattern,
        cli.allow_query,
        cli.concurrency,
    )
    .context("invalid configuration")?;

    let output_dir = config.output_dir.clone();

    tokio::select! {
        result = sitemark::crawl(config) => {
            let stats = result.context("crawl failed")?;
            print_summary(&stats, &output_dir);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Crawling interrupted by user");
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemark=info,warn"),
            1 => EnvFilter::new("sitemark=debug,info"),
            2 => EnvFilter::new("sitemark=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
