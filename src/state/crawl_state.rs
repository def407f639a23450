//! Crawl state machine for one pagination run
//!
//! The controller moves through `Fetching -> Extracting -> Advancing` once per
//! listing page and ends in `Done`. Records are only accepted while a page is
//! being extracted, and the page ceiling is checked before a next link is
//! followed, never before the current page is processed.

use crate::records::RawBookRecord;
use crate::{HarvestError, Result};
use std::fmt;
use url::Url;

/// Why a crawl stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoneReason {
    /// The last processed page had no next link
    NoNextPage,

    /// A next link existed but the page ceiling had been reached
    PageCeiling,

    /// A listing page could not be fetched; earlier records are kept
    FetchFailed,
}

impl DoneReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoNextPage => "no_next_page",
            Self::PageCeiling => "page_ceiling",
            Self::FetchFailed => "fetch_failed",
        }
    }
}

impl fmt::Display for DoneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current phase of the crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlPhase {
    /// About to request this listing page
    Fetching(Url),

    /// Entries of this fetched page are being turned into records
    Extracting(Url),

    /// The page is processed; holds its next link, if any
    Advancing(Option<Url>),

    Done(DoneReason),
}

impl CrawlPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetching(_) => "fetching",
            Self::Extracting(_) => "extracting",
            Self::Advancing(_) => "advancing",
            Self::Done(_) => "done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transient state owned by the crawl controller
#[derive(Debug)]
pub struct CrawlState {
    phase: CrawlPhase,
    pages_visited: u32,
    max_pages: Option<u32>,
    records: Vec<RawBookRecord>,
}

impl CrawlState {
    /// Starts a crawl at `start`, optionally bounded to `max_pages` fetched pages
    pub fn new(start: Url, max_pages: Option<u32>) -> Self {
        Self {
            phase: CrawlPhase::Fetching(start),
            pages_visited: 0,
            max_pages,
            records: Vec::new(),
        }
    }

    pub fn phase(&self) -> &CrawlPhase {
        &self.phase
    }

    pub fn pages_visited(&self) -> u32 {
        self.pages_visited
    }

    pub fn records(&self) -> &[RawBookRecord] {
        &self.records
    }

    /// Consumes the state, returning the accumulated records in crawl order
    pub fn into_records(self) -> Vec<RawBookRecord> {
        self.records
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, CrawlPhase::Done(_))
    }

    pub fn done_reason(&self) -> Option<DoneReason> {
        match self.phase {
            CrawlPhase::Done(reason) => Some(reason),
            _ => None,
        }
    }

    /// Returns true once the number of fetched pages has hit the ceiling
    pub fn ceiling_reached(&self) -> bool {
        self.max_pages.is_some_and(|max| self.pages_visited >= max)
    }

    /// Fetching -> Extracting
    pub fn page_fetched(&mut self) -> Result<()> {
        match &self.phase {
            CrawlPhase::Fetching(url) => {
                let url = url.clone();
                self.pages_visited += 1;
                self.phase = CrawlPhase::Extracting(url);
                Ok(())
            }
            other => Err(invalid(other, "extracting")),
        }
    }

    /// Fetching -> Done(FetchFailed)
    pub fn fetch_failed(&mut self) -> Result<()> {
        match &self.phase {
            CrawlPhase::Fetching(_) => {
                self.phase = CrawlPhase::Done(DoneReason::FetchFailed);
                Ok(())
            }
            other => Err(invalid(other, "done")),
        }
    }

    /// Appends one extracted record; only legal while extracting
    pub fn push_record(&mut self, record: RawBookRecord) -> Result<()> {
        match &self.phase {
            CrawlPhase::Extracting(_) => {
                self.records.push(record);
                Ok(())
            }
            other => Err(invalid(other, "extracting")),
        }
    }

    /// Extracting -> Advancing
    pub fn page_processed(&mut self, next: Option<Url>) -> Result<()> {
        match &self.phase {
            CrawlPhase::Extracting(_) => {
                self.phase = CrawlPhase::Advancing(next);
                Ok(())
            }
            other => Err(invalid(other, "advancing")),
        }
    }

    /// Advancing -> Fetching(next), or Done when there is nowhere to go
    pub fn advance(&mut self) -> Result<()> {
        let next = match &self.phase {
            CrawlPhase::Advancing(next) => next.clone(),
            other => return Err(invalid(other, "fetching")),
        };

        self.phase = match next {
            None => CrawlPhase::Done(DoneReason::NoNextPage),
            Some(_) if self.ceiling_reached() => CrawlPhase::Done(DoneReason::PageCeiling),
            Some(url) => CrawlPhase::Fetching(url),
        };

        Ok(())
    }
}

fn invalid(from: &CrawlPhase, to: &str) -> HarvestError {
    HarvestError::InvalidTransition {
        from: from.name().to_string(),
        to: to.to_string(),
    }
}
