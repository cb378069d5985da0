use cinedex_catalog::ValidationError;
use cinedex_db::StoreError;
use cinedex_transfer::TransferError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Import or export failed
    #[error("{0}")]
    Transfer(#[from] TransferError),

    /// User input failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Standard input reached end of file while a prompt was waiting
    #[error("Input closed")]
    InputClosed,
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(v) => Self::Validation(v),
            StoreError::Storage(s) => Self::Database(s.to_string()),
        }
    }
}
