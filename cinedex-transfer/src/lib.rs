//! Bulk JSON transfer between files and the movie database.
//!
//! Import reads a JSON array of movies and inserts it in one batch; export
//! writes query results back out as an indented JSON array.

pub mod error;
pub mod export;
pub mod import;
pub mod progress;

pub use error::TransferError;
pub use export::{export_file, export_string};
pub use import::{ImportStats, import_file, import_str, parse_movies};
pub use progress::{LogProgress, SilentProgress, TransferProgress};
