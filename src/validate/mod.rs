//! Candidate validation against the English encyclopedia cross-reference.
//!
//! A knowledge-base candidate is accepted only when its page is not a
//! disambiguation hub and its English encyclopedia sitelink carries the same
//! name as the mention (case-insensitive). Decision order:
//!
//! 1. fetch the candidate page, following redirects
//! 2. disambiguation marker present → reject
//! 3. read the English sitelink title (absent → reject)
//! 4. title equals the mention ignoring case → accept, else reject
//!
//! A failed fetch is not a rejection. It is returned as
//! [`ValidationError::Fetch`] and callers abort the run on it.

pub mod error;
pub mod extract;
pub mod types;


pub use error::ValidationError;
pub use extract::{PageFacts, html_english_title, inspect_page};
pub use types::ValidationVerdict;

use tracing::{error, info, instrument};

use crate::transport::Transport;

/// Validates candidates by fetching their pages through a [`Transport`].
#[derive(Debug, Clone)]
pub struct CandidateValidator<T: Transport> {
    transport: T,
}

impl<T: Transport> CandidateValidator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the verdict for `candidate` as a match for `entity_text`.
    #[instrument(skip(self, entity_text, candidate), fields(entity = %entity_text, candidate = %candidate))]
    pub fn validate(
        &self,
        entity_text: &str,
        candidate: &str,
    ) -> Result<ValidationVerdict, ValidationError> {
        let page = self
            .transport
            .get_following_redirects(candidate)
            .map_err(|source| {
                error!(error = %source, "Candidate page unreachable");
                ValidationError::Fetch {
                    candidate: candidate.to_string(),
                    source,
                }
            })?;

        let verdict = judge(entity_text, inspect_page(&page));
        info!(verdict = %verdict, "Candidate validated");
        Ok(verdict)
    }
}

/// Applies the acceptance rule to already-extracted page facts.
pub fn judge(entity_text: &str, facts: PageFacts) -> ValidationVerdict {
    if facts.disambiguation {
        return ValidationVerdict::Disambiguation;
    }

    match facts.english_title {
        None => ValidationVerdict::NoCrossReference,
        Some(title) if titles_match(entity_text, &title) => ValidationVerdict::Valid {
            title,
            coordinate: facts.coordinate,
        },
        Some(title) => ValidationVerdict::TitleMismatch { title },
    }
}

/// Case-insensitive title comparison.
#[inline]
pub fn titles_match(entity_text: &str, title: &str) -> bool {
    entity_text == title || entity_text.to_lowercase() == title.to_lowercase()
}
