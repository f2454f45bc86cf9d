use thiserror::Error;

use crate::cache::CacheError;
use crate::transport::TransportError;
use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The validation source became unreachable mid-run. Abort the batch.
    #[error("FATAL: validation fetch failed for candidate '{candidate}' of '{mention}': {source}")]
    Fatal {
        mention: String,
        candidate: String,
        #[source]
        source: TransportError,
    },

    /// The outcome could not be persisted.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

impl ResolveError {
    pub(crate) fn from_validation(mention: &str, err: ValidationError) -> Self {
        match err {
            ValidationError::Fetch { candidate, source } => ResolveError::Fatal {
                mention: mention.to_string(),
                candidate,
                source,
            },
        }
    }

    /// Returns `true` if processing must stop for the whole batch.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ResolveError::Fatal { .. })
    }
}

/// Convenience result type for resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;
