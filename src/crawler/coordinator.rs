//! Crawl controller - pagination and extraction orchestration
//!
//! This module contains the main crawl loop:
//! - Fetching listing pages one at a time, following next links
//! - Extracting every entry on a fetched page, in document order
//! - Resolving each entry's category before moving to the next entry
//! - Stopping on a missing next link, the page ceiling, or a failed fetch

use crate::config::{ScraperConfig, UserAgentConfig};
use crate::crawler::detail::DetailResolver;
use crate::crawler::extractor::{ItemExtractor, ListingEntry};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::listing::{fetch_listing, ListingPage};
use crate::output::CrawlStatistics;
use crate::records::{RawBookRecord, UNKNOWN_SUBCATEGORY};
use crate::state::{CrawlPhase, CrawlState};
use crate::{HarvestError, Result};
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Records and statistics of a finished crawl
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Every extracted record, in page order then entry order
    pub records: Vec<RawBookRecord>,
    pub stats: CrawlStatistics,
}

/// Drives one sequential crawl of a paginated catalog
pub struct CrawlController {
    client: Client,
    base_url: Url,
    max_pages: Option<u32>,
    extractor: ItemExtractor,
    resolver: DetailResolver,
}

impl CrawlController {
    /// Creates a controller for the catalog at `base_url`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlController)` - Ready to run
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(
        base_url: Url,
        scraper: &ScraperConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self> {
        let client = build_http_client(
            user_agent,
            Duration::from_secs(scraper.request_timeout),
        )?;

        let resolver = DetailResolver::new(
            client.clone(),
            scraper.max_retries,
            Duration::from_millis(scraper.retry_backoff),
        );
        let extractor = ItemExtractor::new(base_url.clone(), scraper.catalog_segment.clone());

        tracing::info!("Initialized crawl controller with base URL: {}", base_url);

        Ok(Self {
            client,
            base_url,
            max_pages: scraper.max_pages,
            extractor,
            resolver,
        })
    }

    /// Runs the crawl to completion
    ///
    /// A listing fetch failure ends the crawl but is not an error: the records
    /// gathered so far are returned.
    pub async fn run(&self) -> Result<CrawlOutcome> {
        let started_at = Utc::now();
        let mut state = CrawlState::new(self.base_url.clone(), self.max_pages);
        let mut dropped_entries = 0usize;

        while !state.is_done() {
            let url = match state.phase() {
                CrawlPhase::Fetching(url) => url.clone(),
                other => {
                    return Err(HarvestError::InvalidTransition {
                        from: other.name().to_string(),
                        to: "fetching".to_string(),
                    })
                }
            };

            tracing::info!("Scraping page: {}", url);

            let (entries, next) = match fetch_listing(&self.client, &url).await {
                Ok(page) => self.read_page(&page, &mut dropped_entries),
                Err(e) => {
                    tracing::error!("HTTP request error for {}: {}", url, e);
                    state.fetch_failed()?;
                    continue;
                }
            };

            state.page_fetched()?;

            for entry in entries {
                let record = self.extractor.extract(entry, &self.resolver).await;
                state.push_record(record)?;
            }

            state.page_processed(next)?;
            state.advance()?;
        }

        let stats = CrawlStatistics {
            pages_visited: state.pages_visited(),
            records: state.records().len(),
            unknown_subcategories: state
                .records()
                .iter()
                .filter(|r| r.subcategory == UNKNOWN_SUBCATEGORY)
                .count(),
            dropped_entries,
            done_reason: state.done_reason(),
            started_at,
            finished_at: Utc::now(),
        };
        stats.log();

        Ok(CrawlOutcome {
            records: state.into_records(),
            stats,
        })
    }

    /// Parses every entry on a page and finds its next link
    ///
    /// Entries that fail to parse are logged and skipped; the rest of the page
    /// is unaffected.
    fn read_page(
        &self,
        page: &ListingPage,
        dropped_entries: &mut usize,
    ) -> (Vec<ListingEntry>, Option<Url>) {
        let nodes = page.entries();
        tracing::info!("Found {} books on {}", nodes.len(), page.url());

        let mut entries = Vec::with_capacity(nodes.len());
        for node in nodes {
            match self.extractor.parse_entry(node) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::error!("Error extracting book details: {}", e);
                    *dropped_entries += 1;
                }
            }
        }

        (entries, page.next_page())
    }
}
