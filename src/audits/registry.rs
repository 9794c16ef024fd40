use super::{Audit, AuditContext, AuditError, AuditMeta, AuditOutcome, AuditRecord, CumulativeLayoutShift, RunSettings};
use crate::Result;
use crate::artifacts::Artifacts;
use crate::computed::{ComputedMetricCache, MetricProvider};
use crate::i18n::StringResolver;
use crate::scoring::ScoreCalibration;
use futures::future::join_all;
use ohno::bail;
use std::collections::BTreeMap;
use std::sync::Arc;

const LOG_TARGET: &str = "  registry";

/// Per-run inputs for [`AuditRegistry::run_all`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub settings: RunSettings,

    /// Calibration overrides keyed by audit id.
    pub calibrations: BTreeMap<String, ScoreCalibration>,
}

/// An ordered collection of audits with unique ids.
#[derive(Debug, Default)]
pub struct AuditRegistry {
    audits: Vec<Box<dyn Audit>>,
}

impl AuditRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in audit, each fed by `provider` through a shared
    /// memoizing cache.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in audit cannot be constructed.
    pub fn with_default_audits(provider: Arc<dyn MetricProvider>, strings: &dyn StringResolver) -> Result<Self> {
        let cls: Arc<dyn MetricProvider> = Arc::new(ComputedMetricCache::new("cumulative layout shift", provider));

        let mut registry = Self::new();
        registry.register(CumulativeLayoutShift::new(cls, strings)?)?;
        Ok(registry)
    }

    /// Add an audit.
    ///
    /// # Errors
    ///
    /// Returns an error if an audit with the same id is already registered.
    pub fn register(&mut self, audit: impl Audit + 'static) -> Result<()> {
        let id = audit.meta().id;
        if self.get(id).is_some() {
            bail!("an audit with id '{id}' is already registered");
        }

        log::debug!(target: LOG_TARGET, "Registered audit '{id}'");
        self.audits.push(Box::new(audit));
        Ok(())
    }

    /// Metadata of every registered audit, in registration order.
    pub fn metas(&self) -> impl Iterator<Item = &AuditMeta> {
        self.audits.iter().map(|audit| audit.meta())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Audit> {
        self.audits.iter().find(|audit| audit.meta().id == id).map(|audit| &**audit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.audits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }

    /// Check that every override names a registered audit that accepts a calibration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first override that cannot be applied.
    pub fn validate_overrides(&self, calibrations: &BTreeMap<String, ScoreCalibration>) -> Result<()> {
        for id in calibrations.keys() {
            let Some(audit) = self.get(id) else {
                bail!("calibration given for unknown audit '{id}'");
            };

            if !audit.meta().scoring_mode.is_numeric() {
                bail!(
                    "audit '{id}' uses the '{}' scoring mode and cannot be calibrated",
                    audit.meta().scoring_mode
                );
            }
        }

        Ok(())
    }

    /// Run every audit concurrently against `artifacts`.
    ///
    /// Each audit's outcome is recorded independently, so a failing audit does not stop the
    /// others. Audits whose required artifacts are missing fail without being run.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` carries an override that [`Self::validate_overrides`]
    /// rejects.
    pub async fn run_all(&self, artifacts: &Artifacts, options: &RunOptions) -> Result<Vec<AuditRecord>> {
        self.validate_overrides(&options.calibrations)?;

        let contexts: Vec<_> = self
            .audits
            .iter()
            .map(|audit| {
                let context = AuditContext::new(options.settings.clone());
                match options.calibrations.get(audit.meta().id) {
                    Some(calibration) => context.with_calibration(*calibration),
                    None => context,
                }
            })
            .collect();

        let outcomes = join_all(
            self.audits
                .iter()
                .zip(&contexts)
                .map(|(audit, context)| run_one(&**audit, artifacts, context)),
        )
        .await;

        Ok(self
            .audits
            .iter()
            .zip(outcomes)
            .map(|(audit, outcome)| AuditRecord {
                meta: audit.meta().clone(),
                outcome,
            })
            .collect())
    }
}

async fn run_one(audit: &dyn Audit, artifacts: &Artifacts, context: &AuditContext) -> AuditOutcome {
    let meta = audit.meta();

    if let Some(&artifact) = artifacts.missing(meta.required_artifacts).first() {
        log::warn!(target: LOG_TARGET, "Skipping audit '{}': missing '{artifact}' artifact", meta.id);
        return AuditOutcome::Failed(AuditError::MissingArtifact { audit: meta.id, artifact });
    }

    let outcome = AuditOutcome::from(audit.run(artifacts, context).await);
    match &outcome {
        AuditOutcome::Scored(result) => {
            log::debug!(target: LOG_TARGET, "Audit '{}' scored {:?}", meta.id, result.score);
        }
        AuditOutcome::Failed(error) => {
            log::warn!(target: LOG_TARGET, "{error}");
        }
    }

    outcome
}
