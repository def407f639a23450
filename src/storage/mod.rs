//! Storage module for persisting harvest data
//!
//! This module handles all file output for the pipeline:
//! - Raw record CSV files written at the end of a crawl
//! - The cleaned SQLite dataset written by the processing stage
//!
//! Both are written to a temporary sibling first and renamed into place, so a
//! failed write never damages an earlier file at the same path.

mod csv_store;
mod dataset;
mod schema;
mod traits;

pub use csv_store::{read_raw_records, write_raw_records, CsvRecordStore, RAW_FILE_NAME};
pub use dataset::{load_dataset, write_dataset, DATASET_FILE_NAME};
pub use schema::{initialize_schema, SCHEMA_SQL};
pub use traits::RawRecordStore;

use crate::Result;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Temporary path next to `path`, used while a replacement is being built
pub(crate) fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes a file through a temporary sibling and renames it over `path`
pub(crate) fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let tmp = temp_sibling(path);
    let result = write_then_rename(&tmp, path, write);

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }

    result
}

fn write_then_rename<F>(tmp: &Path, path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let mut file = File::create(tmp)?;
    write(&mut file)?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(tmp, path)?;
    Ok(())
}
