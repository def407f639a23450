//! CSV implementation of the raw record store

use crate::records::{RawBookRecord, RAW_HEADERS};
use crate::storage::traits::RawRecordStore;
use crate::storage::replace_file;
use crate::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the raw record file inside the raw data directory
pub const RAW_FILE_NAME: &str = "books_data.csv";

/// Writes raw records as `<dir>/books_data.csv`
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    dir: PathBuf,
}

impl CsvRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the records will be written to
    pub fn path(&self) -> PathBuf {
        self.dir.join(RAW_FILE_NAME)
    }
}

impl RawRecordStore for CsvRecordStore {
    fn write_records(&self, records: &[RawBookRecord]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path();

        replace_file(&path, |file| write_raw_records(file, records))?;

        tracing::info!("Scraped {} books to {}", records.len(), path.display());
        Ok(path)
    }
}

/// Serializes records as CSV with a header row
///
/// The header comes from the record field names; with no records only the
/// header is written.
pub fn write_raw_records<W: Write>(writer: W, records: &[RawBookRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if records.is_empty() {
        wtr.write_record(RAW_HEADERS)?;
    }

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Reads a raw record file back into typed records
pub fn read_raw_records(path: &Path) -> Result<Vec<RawBookRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for result in rdr.deserialize() {
        records.push(result?);
    }

    Ok(records)
}
