//! Crawler module for catalog fetching and extraction
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and outcome classification
//! - Listing page parsing and pagination
//! - Per-entry extraction and detail page category resolution
//! - Overall crawl coordination

mod category;
mod coordinator;
mod detail;
mod extractor;
mod fetcher;
mod listing;
mod parser;

pub use category::{active_nav_category, breadcrumb_category, resolve_category, STRATEGIES};
pub use coordinator::{CrawlController, CrawlOutcome};
pub use detail::DetailResolver;
pub use extractor::{ItemExtractor, ListingEntry};
pub use fetcher::{build_http_client, fetch_url, FetchResult, FetchedPage};
pub use listing::{fetch_listing, ListingPage};

use crate::config::{ScraperConfig, UserAgentConfig};
use crate::Result;
use url::Url;

/// Runs a complete crawl of the catalog at `base_url`
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Fetch listing pages, following next links up to the page ceiling
/// 3. Extract every entry and resolve its category
/// 4. Return the records in crawl order along with run statistics
pub async fn crawl(
    base_url: Url,
    scraper: &ScraperConfig,
    user_agent: &UserAgentConfig,
) -> Result<CrawlOutcome> {
    CrawlController::new(base_url, scraper, user_agent)?.run().await
}
