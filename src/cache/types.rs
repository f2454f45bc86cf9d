use serde::{Deserialize, Serialize};

use crate::constants::RECORD_SCHEMA_VERSION;
use crate::hashing::mention_key;

/// Latitude/longitude pair carried alongside a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl AuxiliaryCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for AuxiliaryCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Persisted resolution outcome for one raw mention.
///
/// Stored as pretty JSON, one file per key. An empty `identifier` is a cached
/// "no match", which is different from having no record at all.
///
/// # Example
/// ```rust
/// use linker::cache::ResolutionRecord;
///
/// let record = ResolutionRecord::new("Paris", "http://www.wikidata.org/entity/Q90", None);
/// assert!(record.is_match());
/// assert_eq!(record.key.len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    /// Layout version; records with another version are ignored on read.
    pub schema_version: u32,
    /// Hex digest of `mention`.
    pub key: String,
    /// The raw mention, kept for inspection.
    pub mention: String,
    /// Resolved entity URI, or `""` when nothing matched.
    pub identifier: String,
    /// Coordinate attached during resolution, if any.
    #[serde(default)]
    pub coordinate: Option<AuxiliaryCoordinate>,
    /// Unix timestamp (seconds) of the resolution.
    pub resolved_at: i64,
}

impl ResolutionRecord {
    /// Builds a current-schema record keyed by `mention`, stamped now.
    pub fn new(
        mention: &str,
        identifier: impl Into<String>,
        coordinate: Option<AuxiliaryCoordinate>,
    ) -> Self {
        Self {
            schema_version: RECORD_SCHEMA_VERSION,
            key: mention_key(mention),
            mention: mention.to_string(),
            identifier: identifier.into(),
            coordinate,
            resolved_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Returns `true` if the record holds an identifier.
    #[inline]
    pub fn is_match(&self) -> bool {
        !self.identifier.is_empty()
    }
}
