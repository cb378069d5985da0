//! Write operations: insert, partial update, and delete.

use cinedex_catalog::{MovieUpdate, NewMovie, ValidationError};
use rusqlite::types::Value;
use rusqlite::{Connection, params, params_from_iter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result of a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The update carried no fields; the store was not touched.
    NothingToUpdate,
    /// The statement ran and changed this many rows (0 if the id is unknown).
    Updated(usize),
}

const INSERT_SQL: &str =
    "INSERT INTO movies (title, director, genre, year, rating) VALUES (?1, ?2, ?3, ?4, ?5)";

// ── Inserts ─────────────────────────────────────────────────────────────────

/// Insert a single movie. Returns the generated ID.
pub fn insert_movie(conn: &Connection, movie: &NewMovie) -> Result<i64, StoreError> {
    movie.validate()?;
    conn.execute(
        INSERT_SQL,
        params![
            movie.title,
            movie.director,
            movie.genre,
            movie.year,
            movie.rating
        ],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Inserted movie {} ('{}')", id, movie.title);
    Ok(id)
}

/// Insert a batch of movies in one transaction.
///
/// Every movie is validated before anything is written; either all rows are
/// committed or none are. Returns the number of rows inserted.
pub fn insert_movies(conn: &Connection, movies: &[NewMovie]) -> Result<usize, StoreError> {
    for movie in movies {
        movie.validate()?;
    }

    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(INSERT_SQL)?;
        for movie in movies {
            stmt.execute(params![
                movie.title,
                movie.director,
                movie.genre,
                movie.year,
                movie.rating
            ])?;
        }
    }
    tx.commit()?;

    log::debug!("Inserted {} movies", movies.len());
    Ok(movies.len())
}

// ── Updates ─────────────────────────────────────────────────────────────────

/// Apply the fields present in `update` to the movie with the given id.
///
/// The existence of `id` is not checked; an unknown id yields
/// `UpdateOutcome::Updated(0)`.
pub fn update_movie(
    conn: &Connection,
    id: i64,
    update: &MovieUpdate,
) -> Result<UpdateOutcome, StoreError> {
    if update.is_empty() {
        return Ok(UpdateOutcome::NothingToUpdate);
    }
    update.validate()?;

    let mut columns: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    if let Some(title) = &update.title {
        columns.push("title");
        values.push(Value::Text(title.clone()));
    }
    if let Some(director) = &update.director {
        columns.push("director");
        values.push(Value::Text(director.clone()));
    }
    if let Some(genre) = &update.genre {
        columns.push("genre");
        values.push(Value::Text(genre.clone()));
    }
    if let Some(year) = update.year {
        columns.push("year");
        values.push(Value::Integer(i64::from(year)));
    }
    if let Some(rating) = update.rating {
        columns.push("rating");
        values.push(Value::Real(rating));
    }

    let set_clause = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ?{}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE movies SET {} WHERE id = ?{}",
        set_clause,
        values.len() + 1
    );
    values.push(Value::Integer(id));

    let changed = conn.execute(&sql, params_from_iter(values))?;
    log::debug!("Updated movie {} ({} row(s), fields: {})", id, changed, columns.join(","));
    Ok(UpdateOutcome::Updated(changed))
}

// ── Deletes ─────────────────────────────────────────────────────────────────

/// Delete every movie. Returns the number of rows removed.
pub fn delete_all_movies(conn: &Connection) -> Result<usize, StoreError> {
    let removed = conn.execute("DELETE FROM movies", [])?;
    log::debug!("Deleted all movies ({} row(s))", removed);
    Ok(removed)
}

/// Delete exactly the given ids, in one transaction.
///
/// Callers collect the ids from a prior search so the deleted set is the set
/// that was shown. Unknown ids are skipped. Returns the number of rows removed.
pub fn delete_movies_by_ids(conn: &Connection, ids: &[i64]) -> Result<usize, StoreError> {
    let tx = conn.unchecked_transaction()?;
    let mut removed = 0;
    {
        let mut stmt = tx.prepare("DELETE FROM movies WHERE id = ?1")?;
        for id in ids {
            removed += stmt.execute(params![id])?;
        }
    }
    tx.commit()?;
    log::debug!("Deleted {} of {} requested movie(s)", removed, ids.len());
    Ok(removed)
}
