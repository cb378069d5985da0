//! Read queries for the movie database.

use cinedex_catalog::MovieRecord;
use rusqlite::{Connection, Row, params};

use crate::operations::StoreError;

/// Search movies by title.
///
/// `None` or an empty filter returns every movie. Otherwise the filter is
/// matched as a case-sensitive substring via `LIKE '%filter%'`; `%` and `_`
/// inside the filter keep their LIKE wildcard meaning. Results are ordered by id.
pub fn search_movies(
    conn: &Connection,
    title_filter: Option<&str>,
) -> Result<Vec<MovieRecord>, StoreError> {
    match title_filter.filter(|t| !t.is_empty()) {
        Some(title) => {
            let pattern = format!("%{}%", title);
            let mut stmt = conn.prepare(
                "SELECT id, title, director, genre, year, rating
                 FROM movies WHERE title LIKE ?1 ORDER BY id",
            )?;
            let rows = stmt.query_map(params![pattern], row_to_movie)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, title, director, genre, year, rating
                 FROM movies ORDER BY id",
            )?;
            let rows = stmt.query_map([], row_to_movie)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
    }
}

/// Look up a single movie by id.
pub fn find_movie(conn: &Connection, id: i64) -> Result<Option<MovieRecord>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, director, genre, year, rating
         FROM movies WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_movie);
    match result {
        Ok(movie) => Ok(Some(movie)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Number of stored movies.
pub fn count_movies(conn: &Connection) -> Result<u64, StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
    Ok(count as u64)
}

// ── Row mapping ─────────────────────────────────────────────────────────────

fn row_to_movie(row: &Row) -> rusqlite::Result<MovieRecord> {
    Ok(MovieRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        director: row.get(2)?,
        genre: row.get(3)?,
        year: row.get(4)?,
        rating: row.get(5)?,
    })
}
