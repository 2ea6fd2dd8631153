//! Error types for annotidy.

use thiserror::Error;

/// Result type for annotidy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for annotidy operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection loading/layout error.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a dataset error.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Error::Dataset(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
