use super::{AuditError, AuditMeta, AuditResult};

/// What happened when the registry ran one audit.
#[derive(Debug, Clone)]
pub enum AuditOutcome {
    Scored(AuditResult),
    Failed(AuditError),
}

impl AuditOutcome {
    #[must_use]
    pub const fn result(&self) -> Option<&AuditResult> {
        match self {
            Self::Scored(result) => Some(result),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&AuditError> {
        match self {
            Self::Scored(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// The score, or `None` if the audit failed or produced no score.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.result().and_then(|result| result.score)
    }
}

impl From<Result<AuditResult, AuditError>> for AuditOutcome {
    fn from(result: Result<AuditResult, AuditError>) -> Self {
        match result {
            Ok(result) => Self::Scored(result),
            Err(error) => Self::Failed(error),
        }
    }
}

/// An audit's metadata paired with its outcome for one run.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub meta: AuditMeta,
    pub outcome: AuditOutcome,
}
