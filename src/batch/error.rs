use std::path::PathBuf;
use thiserror::Error;

use crate::service::ResolveError;

#[derive(Error, Debug)]
pub enum BatchError {
    /// Resolution hit an unrecoverable failure; the whole batch stops.
    #[error("batch aborted: {0}")]
    Fatal(#[source] ResolveError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not shaped like a keyword document.
    #[error("invalid document: {reason}")]
    InvalidDocument { reason: String },

    #[error("failed to serialize document for {path}: {message}")]
    Serialization { path: PathBuf, message: String },
}

impl BatchError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, BatchError::Fatal(_))
    }
}

pub type BatchResult<T> = Result<T, BatchError>;
