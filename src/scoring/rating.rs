use strum::{Display, EnumIter};

/// Minimum score rated as [`Rating::Pass`].
const PASS_THRESHOLD: f64 = 0.9;

/// Minimum score rated as [`Rating::Average`].
const AVERAGE_THRESHOLD: f64 = 0.5;

/// Coarse classification of a score used when rendering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Rating {
    Pass,
    Average,
    Fail,

    /// The audit produced no score.
    Error,
}

impl Rating {
    /// Classify an optional score.
    #[must_use]
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= PASS_THRESHOLD => Self::Pass,
            Some(s) if s >= AVERAGE_THRESHOLD => Self::Average,
            Some(_) => Self::Fail,
            None => Self::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Rating::from_score(Some(1.0)), Rating::Pass);
        assert_eq!(Rating::from_score(Some(0.9)), Rating::Pass);
        assert_eq!(Rating::from_score(Some(0.89)), Rating::Average);
        assert_eq!(Rating::from_score(Some(0.5)), Rating::Average);
        assert_eq!(Rating::from_score(Some(0.49)), Rating::Fail);
        assert_eq!(Rating::from_score(Some(0.0)), Rating::Fail);
    }

    #[test]
    fn test_missing_score_is_error() {
        assert_eq!(Rating::from_score(None), Rating::Error);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::Pass.to_string(), "pass");
        assert_eq!(Rating::Error.to_string(), "error");
    }
}
