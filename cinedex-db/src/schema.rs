//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;

use crate::operations::StoreError;

/// Create the movies table if it doesn't exist.
///
/// This is idempotent: safe to call on an existing database, never drops rows.
pub fn create_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a movie database at the given path.
///
/// Fails if the file cannot be opened or is not an SQLite database. The
/// schema statement forces SQLite to read the header, so a corrupt file is
/// reported here rather than on the first query.
pub fn open_database(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    create_schema(&conn)?;
    log::debug!("Opened movie database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Per-connection settings. Title search is case-sensitive, so LIKE must be too.
fn configure(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch("PRAGMA case_sensitive_like = ON;")?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    director TEXT NOT NULL,
    genre TEXT NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL CHECK (rating >= 1.0 AND rating <= 10.0)
);
"#;
