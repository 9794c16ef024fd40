//! Common utilities shared across report generators.

use crate::audits::AuditOutcome;
use crate::scoring::{Rating, ScoringMode};

/// Format a score with the two decimals it is reported at.
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "n/a".to_string(), |s| format!("{s:.2}"))
}

/// The rating shown for an outcome. Failed audits always rate as an error.
pub fn rating_for(outcome: &AuditOutcome) -> Rating {
    match outcome {
        AuditOutcome::Scored(result) => Rating::from_score(result.score),
        AuditOutcome::Failed(_) => Rating::Error,
    }
}

/// The display mode reported for an outcome; a failed audit is displayed as an error whatever its declared mode.
pub const fn display_mode_for(declared: ScoringMode, outcome: &AuditOutcome) -> ScoringMode {
    match outcome {
        AuditOutcome::Scored(_) => declared,
        AuditOutcome::Failed(_) => ScoringMode::Error,
    }
}
