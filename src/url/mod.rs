//! URL handling module for Sitemark
//!
//! This module provides URL normalization, filename derivation, glob pattern
//! matching, and the eligibility filter that keeps the crawl on one site.

mod filename;
mod filter;
mod glob;
mod normalize;

pub use filename::derive_filename;
pub use filter::UrlFilter;
pub use glob::matches_glob;
pub use normalize::normalize_url;
