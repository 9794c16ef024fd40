use crate::artifacts::ArtifactKind;
use core::fmt;
use std::sync::Arc;

/// Why an audit produced no result.
#[derive(Debug, Clone)]
pub enum AuditError {
    /// A required artifact was not gathered.
    MissingArtifact { audit: &'static str, artifact: ArtifactKind },

    /// The metric is undefined for this page.
    MetricNotComputable { audit: &'static str, reason: Arc<str> },

    /// The metric provider failed. The provider's error is shared as-is.
    Metric { audit: &'static str, source: Arc<ohno::AppError> },

    /// The provider returned a value no measurement can have.
    InvalidMetricValue { audit: &'static str, value: f64 },

    /// The calibration could not be turned into a score curve.
    Calibration { audit: &'static str, source: Arc<ohno::AppError> },
}

impl AuditError {
    /// Id of the audit that failed.
    #[must_use]
    pub const fn audit(&self) -> &'static str {
        match self {
            Self::MissingArtifact { audit, .. }
            | Self::MetricNotComputable { audit, .. }
            | Self::Metric { audit, .. }
            | Self::InvalidMetricValue { audit, .. }
            | Self::Calibration { audit, .. } => audit,
        }
    }
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArtifact { audit, artifact } => {
                write!(f, "audit '{audit}' requires the '{artifact}' artifact, which was not gathered")
            }
            Self::MetricNotComputable { audit, reason } => write!(f, "audit '{audit}' could not compute its metric: {reason}"),
            Self::Metric { audit, source } => write!(f, "audit '{audit}' failed to obtain its metric: {source}"),
            Self::InvalidMetricValue { audit, value } => write!(f, "audit '{audit}' received an invalid metric value: {value}"),
            Self::Calibration { audit, source } => write!(f, "audit '{audit}' has an unusable calibration: {source}"),
        }
    }
}

impl core::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Metric { source, .. } | Self::Calibration { source, .. } => {
                Some(AsRef::<dyn core::error::Error + Send + Sync>::as_ref(&**source))
            }
            Self::MissingArtifact { .. } | Self::MetricNotComputable { .. } | Self::InvalidMetricValue { .. } => None,
        }
    }
}
