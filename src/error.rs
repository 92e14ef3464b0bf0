//! Error types for netview

use thiserror::Error;

/// Result type alias for netview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in netview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Illegal address format: {0}")]
    InvalidAddress(String),

    #[error("Illegal subnet format: {0}")]
    InvalidSubnet(String),

    #[error("Prefix length out of range: {0} (must be 0..=32)")]
    InvalidPrefixLength(u8),

    #[error("Illegal line format: expected {expected} fields, found {found}")]
    InvalidLine { expected: usize, found: usize },

    #[error("Duplicate subnet not allowed: {0}")]
    DuplicateSubnet(String),

    #[error("{source_name} line {line}: {source}")]
    Load {
        source_name: String,
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Line number attached by the loader, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Load { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The underlying error with any load annotation stripped
    pub fn root(&self) -> &Error {
        match self {
            Error::Load { source, .. } => source.root(),
            other => other,
        }
    }
}
