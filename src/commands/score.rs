use super::Host;
use super::common::{Common, GlobalArgs};
use crate::Result;
use crate::artifacts::{Artifacts, DEFAULT_PASS, Trace, TraceId};
use crate::audits::{CumulativeLayoutShift, RunOptions};
use crate::computed::{FixedMetricProvider, MetricProvider, RawMetricValue};
use crate::scoring::ScoreCalibration;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, bail};
use std::sync::Arc;

const LOG_TARGET: &str = "     score";

/// Identity of the placeholder trace a measured value is attached to.
const MEASURED_TRACE_ID: &str = "measured";

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Measured cumulative layout shift
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    /// Context about how the value was measured, included in the report
    #[arg(long, value_name = "TEXT")]
    pub explanation: Option<String>,

    /// Value that scores 0.9, overriding the configured calibration
    #[arg(long, value_name = "X", requires = "median")]
    pub podr: Option<f64>,

    /// Value that scores 0.5, overriding the configured calibration
    #[arg(long, value_name = "Y", requires = "podr")]
    pub median: Option<f64>,

    /// Output the result to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the result to the console even when a JSON file is written
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

pub async fn process_score<H: Host>(host: &mut H, global: &GlobalArgs, args: &ScoreArgs) -> Result<()> {
    let common = Common::new(global)?;

    let mut measurement = RawMetricValue::new(args.value);
    if let Some(explanation) = &args.explanation {
        measurement = measurement.with_explanation(explanation.clone());
    }

    let provider: Arc<dyn MetricProvider> = Arc::new(FixedMetricProvider::new(measurement));
    let registry = common.registry(provider)?;

    let mut calibrations = common.config.audits.clone();
    if let (Some(podr), Some(median)) = (args.podr, args.median) {
        let calibration = ScoreCalibration::new(podr, median).into_app_err("applying --podr and --median")?;
        let _ = calibrations.insert(CumulativeLayoutShift::ID.to_string(), calibration);
    }

    let options = RunOptions {
        settings: common.config.run_settings(),
        calibrations,
    };

    let artifacts = Artifacts::new().with_trace(DEFAULT_PASS, Trace::new(TraceId::new(MEASURED_TRACE_ID), Vec::new()));

    log::info!(target: LOG_TARGET, "Scoring measured value {}", args.value);
    let records = registry.run_all(&artifacts, &options).await?;

    common.report(host, &records, args.console, args.json.as_ref())?;

    let failed = records.iter().filter(|record| record.outcome.error().is_some()).count();
    if failed > 0 {
        bail!("{failed} audit(s) could not be scored");
    }

    Ok(())
}
