use std::path::PathBuf;

use cinedex_db::StoreError;

/// Errors that can occur while importing or exporting movie files.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}
