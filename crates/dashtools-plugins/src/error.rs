//! Plugin registration errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginError {
    #[error("Plugin already registered: {0}")]
    DuplicateId(String),

    #[error("Invalid metadata for plugin '{id}': {reason}")]
    InvalidMetadata { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PluginError>;
