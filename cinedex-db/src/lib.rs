//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation, CRUD operations, and title search
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{
    StoreError, UpdateOutcome, delete_all_movies, delete_movies_by_ids, insert_movie,
    insert_movies, update_movie,
};
pub use queries::{count_movies, find_movie, search_movies};
pub use schema::{open_database, open_memory};
pub use store::MovieStore;
