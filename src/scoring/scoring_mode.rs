use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How an audit's score is meant to be displayed and aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ScoringMode {
    /// Scores vary continuously between 0 and 1.
    Numeric,

    /// Scores are either 0 or 1.
    Binary,

    /// The audit must be checked by a person.
    Manual,

    /// The audit carries information but no score.
    Informative,

    /// The audit does not apply to the page.
    NotApplicable,

    /// The audit failed to produce a result.
    Error,
}

impl ScoringMode {
    /// Whether audits in this mode are scored with a calibration curve.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn test_display_is_camel_case() {
        assert_eq!(ScoringMode::Numeric.to_string(), "numeric");
        assert_eq!(ScoringMode::NotApplicable.to_string(), "notApplicable");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ScoringMode::from_str("binary").unwrap(), ScoringMode::Binary);
        let _ = ScoringMode::from_str("bogus").unwrap_err();
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&ScoringMode::NotApplicable).unwrap();
        assert_eq!(json, "\"notApplicable\"");
    }

    #[test]
    fn test_is_numeric() {
        assert!(ScoringMode::Numeric.is_numeric());
        assert!(!ScoringMode::Binary.is_numeric());
    }
}
