use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The candidate page could not be fetched. Callers must treat this as
    /// fatal for the run: without the page no verdict can be trusted.
    #[error("failed to fetch candidate page '{candidate}': {source}")]
    Fetch {
        candidate: String,
        #[source]
        source: TransportError,
    },
}
