use crate::artifacts::ArtifactKind;
use crate::scoring::{ScoreCalibration, ScoringMode};
use serde::Serialize;

/// Static description of an audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    /// Unique among all audits in a run.
    pub id: &'static str,
    pub title: String,
    pub description: String,
    #[serde(rename = "scoreDisplayMode")]
    pub scoring_mode: ScoringMode,

    /// Every artifact the audit reads.
    pub required_artifacts: &'static [ArtifactKind],

    /// Calibration used when the caller supplies none. Only numeric audits have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_calibration: Option<ScoreCalibration>,
}
