//! Error types for reading, writing and fetching MatrixMarket files

use mtx_core::MtxError;
use thiserror::Error;

/// Result type alias for mtx operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in mtx
#[derive(Debug, Error)]
pub enum Error {
    /// The text violates the MatrixMarket grammar
    #[error(transparent)]
    Format(#[from] MtxError),

    /// I/O error from the underlying stream or sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure of the retrieval layer; never interpreted or retried here
    #[error("Retrieval error: {0}")]
    Retrieval(String),
}

impl Error {
    /// The grammar error, if this is one
    pub fn format(&self) -> Option<&MtxError> {
        match self {
            Error::Format(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_format(&self) -> bool {
        self.format().is_some()
    }
}
