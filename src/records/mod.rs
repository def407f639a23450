//! Record types shared by the crawl and processing stages
//!
//! - `RawBookRecord`: one scraped listing entry, as written to the raw CSV
//! - `CleanedBookRecord`: one validated row of the cleaned dataset

mod cleaned;
mod raw;

pub use cleaned::{Availability, CleanedBookRecord};
pub use raw::{rating_from_code, RatingCode, RawBookRecord, RAW_HEADERS, UNKNOWN_SUBCATEGORY};
