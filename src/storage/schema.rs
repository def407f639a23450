//! Cleaned dataset schema
//!
//! Column types and CHECK constraints mirror the invariants every cleaned row
//! satisfies.

use rusqlite::Connection;

/// SQL schema for the cleaned dataset
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    Title TEXT NOT NULL CHECK (length(Title) > 0),
    Price REAL NOT NULL CHECK (Price >= 0),
    Rating INTEGER NOT NULL CHECK (Rating BETWEEN 1 AND 5),
    Availability TEXT NOT NULL CHECK (Availability IN ('In Stock', 'Out of Stock')),
    URL TEXT NOT NULL
);
"#;

/// Creates the dataset table on a fresh connection
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
