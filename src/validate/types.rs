use crate::cache::AuxiliaryCoordinate;

/// Outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationVerdict {
    /// Cross-reference title matches the mention.
    Valid {
        /// Observed English encyclopedia title.
        title: String,
        /// Coordinate read from the candidate page, if it carries one.
        coordinate: Option<AuxiliaryCoordinate>,
    },
    /// The candidate page is a disambiguation hub.
    Disambiguation,
    /// A title was found but differs from the mention.
    TitleMismatch {
        /// Observed English encyclopedia title.
        title: String,
    },
    /// No English encyclopedia link could be found.
    NoCrossReference,
}

impl ValidationVerdict {
    /// Returns `true` if the candidate was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid { .. })
    }

    /// The observed cross-reference title, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            ValidationVerdict::Valid { title, .. } | ValidationVerdict::TitleMismatch { title } => {
                Some(title)
            }
            ValidationVerdict::Disambiguation | ValidationVerdict::NoCrossReference => None,
        }
    }

    /// Coordinate attached to an accepted candidate.
    pub fn coordinate(&self) -> Option<AuxiliaryCoordinate> {
        match self {
            ValidationVerdict::Valid { coordinate, .. } => *coordinate,
            _ => None,
        }
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            ValidationVerdict::Valid { .. } => "VALID",
            ValidationVerdict::Disambiguation => "DISAMBIGUATION",
            ValidationVerdict::TitleMismatch { .. } => "TITLE_MISMATCH",
            ValidationVerdict::NoCrossReference => "NO_CROSS_REFERENCE",
        }
    }
}

impl std::fmt::Display for ValidationVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationVerdict::Valid { title, .. } => write!(f, "VALID (title: {})", title),
            ValidationVerdict::TitleMismatch { title } => {
                write!(f, "TITLE_MISMATCH (title: {})", title)
            }
            other => f.write_str(other.debug_status()),
        }
    }
}
