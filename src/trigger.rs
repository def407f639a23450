//! Crawl and processing triggers
//!
//! Triggers are the outer boundary of the library: they look up the requested
//! identifier, run one stage and report the outcome as a [`TriggerResult`].
//! No error escapes a trigger.

use crate::config::{Config, OutputConfig, ScraperConfig, SourceProvider, UserAgentConfig};
use crate::crawler::CrawlController;
use crate::processing::DatasetCleaner;
use crate::storage::{CsvRecordStore, RawRecordStore};
use crate::url::parse_base_url;
use crate::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Instrument;

/// Structured outcome of a trigger call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerResult {
    pub status_code: u16,
    pub message: String,
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TriggerResult {
    pub fn success(message: impl Into<String>, path: &Path) -> Self {
        Self {
            status_code: 200,
            message: message.into(),
            path: Some(path.display().to_string()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl ToString) -> Self {
        Self {
            status_code: 500,
            message: message.into(),
            path: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Everything a trigger needs from the configuration
#[derive(Clone, Copy)]
pub struct TriggerContext<'a> {
    pub sources: &'a (dyn SourceProvider + Sync),
    pub scraper: &'a ScraperConfig,
    pub user_agent: &'a UserAgentConfig,
    pub output: &'a OutputConfig,
}

impl<'a> TriggerContext<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            sources: config,
            scraper: &config.scraper,
            user_agent: &config.user_agent,
            output: &config.output,
        }
    }
}

/// Crawls the catalog registered under `source_id` and writes its raw records
///
/// A crawl that stops early on a listing fetch failure still succeeds with
/// whatever records were gathered.
pub async fn run_scraper(ctx: TriggerContext<'_>, source_id: &str) -> TriggerResult {
    let span = tracing::info_span!(
        "crawl",
        source_id = %source_id,
        base_url = tracing::field::Empty
    );

    match scrape(ctx, source_id).instrument(span).await {
        Ok(path) => TriggerResult::success("Scraping completed successfully", &path),
        Err(e) => {
            tracing::error!(source_id = %source_id, "Scraping failed: {}", e);
            TriggerResult::failure("Scraping failed", e)
        }
    }
}

async fn scrape(ctx: TriggerContext<'_>, source_id: &str) -> Result<PathBuf> {
    let source = ctx.sources.source(source_id)?;
    let base_url = parse_base_url(&source.url)?;
    tracing::Span::current().record("base_url", tracing::field::display(&base_url));
    tracing::info!("Starting crawl of {}", base_url);

    let controller = CrawlController::new(base_url, ctx.scraper, ctx.user_agent)?;
    let outcome = controller.run().await?;

    let store = CsvRecordStore::new(&ctx.output.raw_data_dir);
    store.write_records(&outcome.records)
}

/// Cleans the raw data file registered under `raw_data_id` into the dataset
pub fn run_processing(ctx: TriggerContext<'_>, raw_data_id: &str) -> TriggerResult {
    let span = tracing::info_span!("process", raw_data_id = %raw_data_id);
    let _guard = span.enter();

    match process(ctx, raw_data_id) {
        Ok(path) => TriggerResult::success("Processing completed successfully", &path),
        Err(e) => {
            tracing::error!("Processing failed: {}", e);
            TriggerResult::failure("Processing failed", e)
        }
    }
}

fn process(ctx: TriggerContext<'_>, raw_data_id: &str) -> Result<PathBuf> {
    let entry = ctx.sources.raw_data(raw_data_id)?;
    let cleaner = DatasetCleaner::new(&ctx.output.processed_data_dir);
    let outcome = cleaner.process(Path::new(&entry.path))?;
    Ok(outcome.path)
}
