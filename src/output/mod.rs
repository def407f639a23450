//! Output module for run summaries
//!
//! This module handles:
//! - Recording crawl statistics at the end of a run
//! - Summarizing cleaned datasets for the CLI

pub mod stats;

pub use stats::{print_dataset_statistics, CrawlStatistics, DatasetStatistics};
