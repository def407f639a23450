//! Run statistics for crawls and cleaned datasets
//!
//! This module provides the summaries logged at the end of a crawl and
//! printed by the CLI when inspecting a cleaned dataset.

use crate::records::{Availability, CleanedBookRecord};
use crate::state::DoneReason;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Summary of one crawl run
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Listing pages fetched successfully
    pub pages_visited: u32,

    /// Records extracted
    pub records: usize,

    /// Records whose category could not be resolved
    pub unknown_subcategories: usize,

    /// Listing entries that failed to parse and were skipped
    pub dropped_entries: usize,

    pub done_reason: Option<DoneReason>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlStatistics {
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Emits the summary as a single info event
    pub fn log(&self) {
        tracing::info!(
            pages = self.pages_visited,
            records = self.records,
            unknown_subcategories = self.unknown_subcategories,
            dropped_entries = self.dropped_entries,
            reason = self.done_reason.map_or("running", |r| r.as_str()),
            "Crawl finished in {}s",
            self.duration_seconds()
        );
    }
}

/// Breakdown of a cleaned dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub rows: usize,

    /// Row count per rating value
    pub by_rating: BTreeMap<u8, usize>,

    pub in_stock: usize,
    pub out_of_stock: usize,

    /// Mean price, absent for an empty dataset
    pub mean_price: Option<f64>,
}

impl DatasetStatistics {
    pub fn from_records(records: &[CleanedBookRecord]) -> Self {
        let mut by_rating = BTreeMap::new();
        let mut in_stock = 0;
        let mut total_price = 0.0;

        for record in records {
            *by_rating.entry(record.rating).or_insert(0) += 1;
            if record.availability == Availability::InStock {
                in_stock += 1;
            }
            total_price += record.price;
        }

        let mean_price = if records.is_empty() {
            None
        } else {
            Some(total_price / records.len() as f64)
        };

        Self {
            rows: records.len(),
            by_rating,
            in_stock,
            out_of_stock: records.len() - in_stock,
            mean_price,
        }
    }
}

/// Prints dataset statistics to stdout in a formatted manner
pub fn print_dataset_statistics(stats: &DatasetStatistics) {
    println!("=== Dataset Statistics ===\n");

    println!("Rows: {}", stats.rows);
    match stats.mean_price {
        Some(mean) => println!("Mean price: {:.2}", mean),
        None => println!("Mean price: n/a"),
    }
    println!();

    println!("Availability:");
    println!("  In Stock: {}", stats.in_stock);
    println!("  Out of Stock: {}", stats.out_of_stock);
    println!();

    println!("Ratings:");
    for (rating, count) in &stats.by_rating {
        let percentage = if stats.rows > 0 {
            (*count as f64 / stats.rows as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", rating, count, percentage);
    }
}
