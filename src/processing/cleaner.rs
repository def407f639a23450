//! Raw record cleaning pipeline
//!
//! Stages run in a fixed order, each assuming the previous ones already ran:
//!
//! 1. drop rows missing any of Title, Price, Rating, Availability, URL
//! 2. parse Price (currency prefix removed), unparseable prices become `None`
//! 3. parse Rating, unparseable or out-of-range ratings become `None`
//! 4. keep only rows with both a price >= 0 and a rating
//! 5. normalize Availability to "In Stock" / "Out of Stock"

use crate::processing::rules::{is_missing, parse_price, parse_rating};
use crate::records::{Availability, CleanedBookRecord};
use crate::storage::{write_dataset, DATASET_FILE_NAME};
use crate::{HarvestError, Result};
use std::path::{Path, PathBuf};

const REQUIRED_COLUMNS: [&str; 5] = ["Title", "Price", "Rating", "Availability", "URL"];

/// One row of a raw data file; blank cells are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub title: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub availability: Option<String>,
    pub url: Option<String>,
}

/// A complete row moving through the parse stages
#[derive(Debug)]
struct Candidate {
    title: String,
    price_text: String,
    rating_text: String,
    availability: String,
    url: String,
    price: Option<f64>,
    rating: Option<u8>,
}

/// A row that passed every validation stage
#[derive(Debug)]
struct Validated {
    title: String,
    price: f64,
    rating: u8,
    availability: String,
    url: String,
}

/// Row counts of one processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStatistics {
    pub rows_read: usize,
    pub rows_kept: usize,
}

impl ProcessingStatistics {
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }
}

/// Where a processing run wrote its dataset and how many rows survived
#[derive(Debug, Clone)]
pub struct ProcessingOutcome {
    pub path: PathBuf,
    pub stats: ProcessingStatistics,
}

/// Cleans raw record files into the typed dataset
#[derive(Debug, Clone)]
pub struct DatasetCleaner {
    output_dir: PathBuf,
}

impl DatasetCleaner {
    /// Creates a cleaner writing to `<output_dir>/books_data.db`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn destination(&self) -> PathBuf {
        self.output_dir.join(DATASET_FILE_NAME)
    }

    /// Reads `input`, cleans it and writes the dataset, replacing any previous one
    ///
    /// # Errors
    ///
    /// Fails when the input cannot be read, lacks a required column, is not
    /// well-formed CSV, or the dataset cannot be written.
    pub fn process(&self, input: &Path) -> Result<ProcessingOutcome> {
        let rows = read_raw_rows(input)?;
        let rows_read = rows.len();

        let cleaned = clean_rows(rows);
        let path = self.destination();
        write_dataset(&path, &cleaned)?;

        let stats = ProcessingStatistics {
            rows_read,
            rows_kept: cleaned.len(),
        };
        tracing::info!(
            rows_read = stats.rows_read,
            rows_dropped = stats.rows_dropped(),
            "Processed {} books to {}",
            stats.rows_kept,
            path.display()
        );

        Ok(ProcessingOutcome { path, stats })
    }
}

/// Reads a raw data file by column name
///
/// Columns beyond the required five (such as Subcategory) are ignored.
pub fn read_raw_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut index = [0usize; 5];
    for (slot, name) in index.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| HarvestError::MissingColumn(name.to_string()))?;
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let cell = |i: usize| {
            record
                .get(index[i])
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        };

        rows.push(RawRow {
            title: cell(0),
            price: cell(1),
            rating: cell(2),
            availability: cell(3),
            url: cell(4),
        });
    }

    Ok(rows)
}

/// Runs all cleaning stages over `rows`, preserving row order
pub fn clean_rows(rows: Vec<RawRow>) -> Vec<CleanedBookRecord> {
    let complete = drop_incomplete(rows);
    let priced = parse_prices(complete);
    let rated = parse_ratings(priced);
    let valid = retain_valid(rated);
    normalize_availability(valid)
}

fn drop_incomplete(rows: Vec<RawRow>) -> Vec<Candidate> {
    rows.into_iter()
        .filter_map(|row| {
            let fields = [
                row.title.as_deref(),
                row.price.as_deref(),
                row.rating.as_deref(),
                row.availability.as_deref(),
                row.url.as_deref(),
            ];
            if fields.iter().any(|f| is_missing(*f)) {
                return None;
            }

            Some(Candidate {
                title: row.title?,
                price_text: row.price?,
                rating_text: row.rating?,
                availability: row.availability?,
                url: row.url?,
                price: None,
                rating: None,
            })
        })
        .collect()
}

fn parse_prices(rows: Vec<Candidate>) -> Vec<Candidate> {
    rows.into_iter()
        .map(|mut row| {
            row.price = parse_price(&row.price_text);
            row
        })
        .collect()
}

fn parse_ratings(rows: Vec<Candidate>) -> Vec<Candidate> {
    rows.into_iter()
        .map(|mut row| {
            row.rating = parse_rating(&row.rating_text);
            row
        })
        .collect()
}

fn retain_valid(rows: Vec<Candidate>) -> Vec<Validated> {
    rows.into_iter()
        .filter_map(|row| match (row.price, row.rating) {
            (Some(price), Some(rating)) if price >= 0.0 => Some(Validated {
                title: row.title,
                price,
                rating,
                availability: row.availability,
                url: row.url,
            }),
            _ => None,
        })
        .collect()
}

fn normalize_availability(rows: Vec<Validated>) -> Vec<CleanedBookRecord> {
    rows.into_iter()
        .map(|row| CleanedBookRecord {
            title: row.title,
            price: row.price,
            rating: row.rating,
            availability: Availability::from_text(&row.availability),
            url: row.url,
        })
        .collect()
}
