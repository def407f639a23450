//! SQLite persistence for the cleaned dataset

use crate::records::{Availability, CleanedBookRecord};
use crate::storage::schema::initialize_schema;
use crate::storage::temp_sibling;
use crate::Result;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

/// File name of the cleaned dataset inside the processed data directory
pub const DATASET_FILE_NAME: &str = "books_data.db";

/// Writes the cleaned dataset to `path`, replacing any previous content
///
/// The database is built next to the destination and renamed over it once
/// complete. Rows keep the order of `records`.
pub fn write_dataset(path: &Path, records: &[CleanedBookRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_sibling(path);
    let result = build_database(&tmp, records).and_then(|()| {
        std::fs::rename(&tmp, path)?;
        Ok(())
    });

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }

    result
}

fn build_database(path: &Path, records: &[CleanedBookRecord]) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }

    let mut conn = Connection::open(path)?;
    initialize_schema(&conn)?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO books (Title, Price, Rating, Availability, URL) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for record in records {
            stmt.execute(params![
                record.title,
                record.price,
                record.rating,
                record.availability.as_str(),
                record.url
            ])?;
        }
    }
    tx.commit()?;

    conn.close().map_err(|(_, e)| e)?;
    Ok(())
}

/// Loads a cleaned dataset in row order
pub fn load_dataset(path: &Path) -> Result<Vec<CleanedBookRecord>> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    let mut stmt = conn.prepare(
        "SELECT Title, Price, Rating, Availability, URL FROM books ORDER BY rowid",
    )?;

    let rows = stmt.query_map([], |row| {
        let availability: String = row.get(3)?;
        let availability = availability.parse::<Availability>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, e.into())
        })?;

        Ok(CleanedBookRecord {
            title: row.get(0)?,
            price: row.get(1)?,
            rating: row.get(2)?,
            availability,
            url: row.get(4)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }

    Ok(records)
}
