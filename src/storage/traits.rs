//! Storage traits
//!
//! This module defines the interface the crawl trigger writes raw records
//! through, so the crawl itself never touches the filesystem.

use crate::records::RawBookRecord;
use crate::Result;
use std::path::PathBuf;

/// Destination for the raw records of one crawl
pub trait RawRecordStore {
    /// Persists `records` in order and returns where they were written
    ///
    /// An empty slice still produces a (header-only) file. A failed write
    /// leaves any previously written file untouched.
    fn write_records(&self, records: &[RawBookRecord]) -> Result<PathBuf>;
}
