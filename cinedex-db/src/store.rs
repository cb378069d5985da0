//! Session-scoped handle over the movie database.

use std::path::Path;

use cinedex_catalog::{MovieRecord, MovieUpdate, NewMovie};
use rusqlite::Connection;

use crate::operations::{self, StoreError, UpdateOutcome};
use crate::{queries, schema};

/// Owns the database connection for the lifetime of a session.
///
/// Acquire once with [`MovieStore::open`], release once with
/// [`MovieStore::close`]. Dropping the store also closes the connection, but
/// without reporting a close failure.
pub struct MovieStore {
    conn: Connection,
}

impl MovieStore {
    /// Open or create the database at `path` and make sure the schema exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_database(path)?,
        })
    }

    /// In-memory store with the full schema.
    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_memory()?,
        })
    }

    /// Borrow the underlying connection for the free-function API.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn search(&self, title_filter: Option<&str>) -> Result<Vec<MovieRecord>, StoreError> {
        queries::search_movies(&self.conn, title_filter)
    }

    pub fn get(&self, id: i64) -> Result<Option<MovieRecord>, StoreError> {
        queries::find_movie(&self.conn, id)
    }

    pub fn count(&self) -> Result<u64, StoreError> {
        queries::count_movies(&self.conn)
    }

    pub fn insert_one(&self, movie: &NewMovie) -> Result<i64, StoreError> {
        operations::insert_movie(&self.conn, movie)
    }

    pub fn insert_many(&self, movies: &[NewMovie]) -> Result<usize, StoreError> {
        operations::insert_movies(&self.conn, movies)
    }

    pub fn update_by_id(
        &self,
        id: i64,
        update: &MovieUpdate,
    ) -> Result<UpdateOutcome, StoreError> {
        operations::update_movie(&self.conn, id, update)
    }

    pub fn delete_all(&self) -> Result<usize, StoreError> {
        operations::delete_all_movies(&self.conn)
    }

    pub fn delete_by_ids(&self, ids: &[i64]) -> Result<usize, StoreError> {
        operations::delete_movies_by_ids(&self.conn, ids)
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Storage(e))?;
        log::debug!("Closed movie database");
        Ok(())
    }
}
