use crate::cache::{AuxiliaryCoordinate, ResolutionRecord};
use crate::normalize::LadderRule;

/// Where a [`ResolutionOutcome`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeSource {
    /// Served from a cached record; no network activity.
    Cache,
    /// Resolved afresh and written to the cache.
    Fresh,
}

impl OutcomeSource {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeSource::Cache => "CACHE",
            OutcomeSource::Fresh => "FRESH",
        }
    }
}

impl std::fmt::Display for OutcomeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value returned for one mention.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionOutcome {
    /// Entity URI, or `""` when no candidate validated.
    pub identifier: String,
    /// Coordinate attached during resolution or read from the cache.
    pub coordinate: Option<AuxiliaryCoordinate>,
    pub source: OutcomeSource,
    /// Ladder rung that produced the match (fresh matches only).
    pub matched_rule: Option<LadderRule>,
}

impl ResolutionOutcome {
    pub(crate) fn from_record(record: ResolutionRecord) -> Self {
        Self {
            identifier: record.identifier,
            coordinate: record.coordinate,
            source: OutcomeSource::Cache,
            matched_rule: None,
        }
    }

    /// Returns `true` if an identifier was found.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        !self.identifier.is_empty()
    }

    /// Last path segment of the identifier (`Q90` for `http://www.wikidata.org/entity/Q90`).
    pub fn entity_id(&self) -> &str {
        self.identifier
            .rsplit('/')
            .next()
            .unwrap_or(&self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id() {
        let outcome = ResolutionOutcome {
            identifier: "http://www.wikidata.org/entity/Q90".to_string(),
            coordinate: None,
            source: OutcomeSource::Fresh,
            matched_rule: Some(LadderRule::Whitespace),
        };
        assert_eq!(outcome.entity_id(), "Q90");
        assert!(outcome.is_resolved());
    }

    #[test]
    fn test_entity_id_unresolved_is_empty() {
        let outcome = ResolutionOutcome {
            identifier: String::new(),
            coordinate: None,
            source: OutcomeSource::Cache,
            matched_rule: None,
        };
        assert_eq!(outcome.entity_id(), "");
        assert!(!outcome.is_resolved());
    }

    #[test]
    fn test_from_record() {
        let record = ResolutionRecord::new(
            "Paris",
            "http://x/Q90",
            Some(AuxiliaryCoordinate::new(1.0, 2.0)),
        );
        let outcome = ResolutionOutcome::from_record(record);

        assert_eq!(outcome.source, OutcomeSource::Cache);
        assert_eq!(outcome.coordinate, Some(AuxiliaryCoordinate::new(1.0, 2.0)));
        assert_eq!(outcome.matched_rule, None);
    }
}
