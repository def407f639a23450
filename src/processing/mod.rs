//! Processing stage: turns a raw record file into the cleaned dataset

mod cleaner;
mod rules;

pub use cleaner::{
    clean_rows, read_raw_rows, DatasetCleaner, ProcessingOutcome, ProcessingStatistics, RawRow,
};
pub use rules::{is_missing, parse_price, parse_rating};
