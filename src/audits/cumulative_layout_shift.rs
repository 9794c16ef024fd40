//! Scores how much a page's layout shifts while it loads.

use super::{Audit, AuditContext, AuditError, AuditMeta, AuditResult};
use crate::Result;
use crate::artifacts::{ArtifactKind, Artifacts, DEFAULT_PASS};
use crate::computed::{MetricProvider, ProviderResult};
use crate::i18n::{StringResolver, UiString};
use crate::scoring::{LogNormalParams, ScoreCalibration, ScoringMode, compute_log_normal_score, normalize_score};
use futures::future::BoxFuture;
use std::sync::Arc;

const LOG_TARGET: &str = "       cls";

const ID: &str = "cumulative-layout-shift";

const REQUIRED_ARTIFACTS: &[ArtifactKind] = &[ArtifactKind::Traces];

const DEFAULT_PODR: f64 = 0.1;
const DEFAULT_MEDIAN: f64 = 0.5;

const TITLE: UiString = UiString::new("audits/metrics/cumulative-layout-shift | title", "Cumulative Layout Shift");

const DESCRIPTION: UiString = UiString::new(
    "audits/metrics/cumulative-layout-shift | description",
    "The more the page's layout changes during its load, the higher the Cumulative Layout Shift. \
     Perfectly solid == 0. Unpleasant experience >= 0.50.",
);

/// The cumulative layout shift audit.
#[derive(Debug)]
pub struct CumulativeLayoutShift {
    meta: AuditMeta,
    default_calibration: ScoreCalibration,
    default_params: LogNormalParams,
    provider: Arc<dyn MetricProvider>,
}

impl CumulativeLayoutShift {
    /// The audit's id.
    pub const ID: &'static str = ID;

    /// Create the audit, resolving its title and description through `strings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in calibration is invalid.
    pub fn new(provider: Arc<dyn MetricProvider>, strings: &dyn StringResolver) -> Result<Self> {
        let default_calibration = Self::default_calibration()?;
        let default_params = LogNormalParams::new(&default_calibration)?;

        Ok(Self {
            meta: AuditMeta {
                id: ID,
                title: strings.resolve(&TITLE),
                description: strings.resolve(&DESCRIPTION),
                scoring_mode: ScoringMode::Numeric,
                required_artifacts: REQUIRED_ARTIFACTS,
                default_calibration: Some(default_calibration),
            },
            default_calibration,
            default_params,
            provider,
        })
    }

    /// The calibration used when the caller supplies none.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in constants do not form a valid calibration.
    pub fn default_calibration() -> Result<ScoreCalibration> {
        ScoreCalibration::new(DEFAULT_PODR, DEFAULT_MEDIAN)
    }

    fn score(&self, value: f64, context: &AuditContext) -> Result<f64, AuditError> {
        let score = match context.calibration() {
            Some(calibration) if *calibration != self.default_calibration => {
                let params = LogNormalParams::new(calibration).map_err(|e| AuditError::Calibration {
                    audit: ID,
                    source: Arc::new(e),
                })?;
                compute_log_normal_score(value, &params)
            }
            _ => compute_log_normal_score(value, &self.default_params),
        };

        Ok(normalize_score(score))
    }
}

impl Audit for CumulativeLayoutShift {
    fn meta(&self) -> &AuditMeta {
        &self.meta
    }

    fn run<'a>(&'a self, artifacts: &'a Artifacts, context: &'a AuditContext) -> BoxFuture<'a, Result<AuditResult, AuditError>> {
        Box::pin(async move {
            let trace = artifacts.trace(DEFAULT_PASS).ok_or(AuditError::MissingArtifact {
                audit: ID,
                artifact: ArtifactKind::Traces,
            })?;

            let metric = match self.provider.request(trace, context).await {
                ProviderResult::Found(metric) => metric,
                ProviderResult::NotComputable(reason) => return Err(AuditError::MetricNotComputable { audit: ID, reason }),
                ProviderResult::Error(source) => return Err(AuditError::Metric { audit: ID, source }),
            };

            if metric.value.is_nan() || metric.value < 0.0 {
                return Err(AuditError::InvalidMetricValue {
                    audit: ID,
                    value: metric.value,
                });
            }

            let score = self.score(metric.value, context)?;
            log::debug!(target: LOG_TARGET, "Trace '{}' has layout shift {} (score {score})", trace.id(), metric.value);

            Ok(AuditResult::new(
                Some(score),
                metric.explanation,
                metric.value,
                context.settings().locale.format_number(metric.value),
            ))
        })
    }
}
