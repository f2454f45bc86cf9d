use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by the resolution cache.
pub enum CacheError {
    /// IO error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded or decoded.
    #[error("record serialization error at {path}: {message}")]
    Serialization {
        /// Record file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Record was written with a different schema version.
    #[error("record schema v{found} at {path}, expected v{expected}")]
    SchemaMismatch {
        /// Record file.
        path: PathBuf,
        /// Version found on disk.
        found: u32,
        /// Version this build writes.
        expected: u32,
    },

    /// Record file name and stored key disagree.
    #[error("record at {path} is stored under key {stored}")]
    KeyMismatch {
        /// Record file.
        path: PathBuf,
        /// Key found inside the record.
        stored: String,
    },

    /// Cache directory is missing and could not be created.
    #[error("cache path unavailable: {path}")]
    StorageUnavailable {
        /// Path that was unavailable.
        path: PathBuf,
    },
}

/// Convenience result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
