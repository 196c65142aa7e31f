//! Error types for the themes module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown theme variant: {0}")]
    UnknownVariant(String),

    #[error("Malformed theme record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid theme record: {0}")]
    InvalidRecord(String),

    #[error("Storage error: {0}")]
    Storage(#[from] dashtools_storage::StorageError),

    #[error("Theme store has been disposed")]
    Disposed,
}

pub type Result<T> = std::result::Result<T, ThemeError>;
