//! Import a JSON array of movies into the catalog database.
//!
//! Each element must carry `title`, `director`, `genre`, `year`, and
//! `rating`; any `id` key is ignored and new ids are assigned on insert.

use std::io;
use std::path::Path;

use cinedex_catalog::NewMovie;
use cinedex_db::operations;
use rusqlite::Connection;

use crate::error::TransferError;
use crate::progress::TransferProgress;

/// Statistics from a single import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub records_read: usize,
    pub records_inserted: usize,
}

/// Import the movies in the JSON file at `path`.
///
/// The whole document is parsed before anything is written, and the rows are
/// inserted in a single transaction, so a failure leaves the database as it was.
pub fn import_file(
    conn: &Connection,
    path: &Path,
    progress: Option<&dyn TransferProgress>,
) -> Result<ImportStats, TransferError> {
    if let Some(p) = progress {
        p.on_phase(&format!("Reading {}", path.display()));
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TransferError::FileNotFound(path.to_path_buf()),
        _ => TransferError::Io(e),
    })?;

    // Invalid UTF-8 is a malformed document and surfaces as a parse error
    let movies: Vec<NewMovie> = serde_json::from_slice(&bytes)?;
    let stats = insert_parsed(conn, &movies, progress)?;
    if let Some(p) = progress {
        p.on_complete(&format!(
            "Imported {} movie(s) from {}",
            stats.records_inserted,
            path.display()
        ));
    }
    Ok(stats)
}

/// Import movies from an in-memory JSON document.
pub fn import_str(
    conn: &Connection,
    json: &str,
    progress: Option<&dyn TransferProgress>,
) -> Result<ImportStats, TransferError> {
    let movies = parse_movies(json)?;
    insert_parsed(conn, &movies, progress)
}

fn insert_parsed(
    conn: &Connection,
    movies: &[NewMovie],
    progress: Option<&dyn TransferProgress>,
) -> Result<ImportStats, TransferError> {
    if let Some(p) = progress {
        p.on_phase(&format!("Inserting {} movie(s)", movies.len()));
    }

    let inserted = operations::insert_movies(conn, movies)?;
    Ok(ImportStats {
        records_read: movies.len(),
        records_inserted: inserted,
    })
}

/// Parse an import document without touching the database.
pub fn parse_movies(json: &str) -> Result<Vec<NewMovie>, TransferError> {
    Ok(serde_json::from_str(json)?)
}
