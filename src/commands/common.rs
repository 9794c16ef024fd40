//! Common processing logic shared between commands.

use super::Host;
use crate::Result;
use crate::artifacts::Trace;
use crate::audits::{AuditContext, AuditRecord, AuditRegistry};
use crate::computed::{MetricProvider, ProviderResult, RawMetricValue};
use crate::config::Config;
use crate::i18n::LocaleStrings;
use crate::reports::{generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use futures::FutureExt;
use futures::future::{self, BoxFuture};
use ohno::IntoAppError;
use std::fs;
use std::io::Write;
use std::sync::Arc;

const LOG_TARGET: &str = "  commands";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Options accepted by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to configuration file (default is `perfscore.toml`)
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Stands in for a real provider when audits are only being described or checked.
#[derive(Debug)]
pub struct Unmeasured;

impl MetricProvider for Unmeasured {
    fn request<'a>(&'a self, _trace: &'a Trace, _context: &'a AuditContext) -> BoxFuture<'a, ProviderResult<RawMetricValue>> {
        future::ready(ProviderResult::NotComputable(Arc::from("no measurement was supplied"))).boxed()
    }
}

#[derive(Debug)]
pub struct Common {
    pub config: Config,
    pub strings: LocaleStrings,
    color: ColorMode,
}

impl Common {
    /// Initialize logging and load the configuration and message catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or message catalog cannot be loaded
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

        let strings = match &config.messages {
            Some(path) => LocaleStrings::load(config.locale, path)?,
            None => LocaleStrings::new(config.locale),
        };

        Ok(Self {
            config,
            strings,
            color: args.color,
        })
    }

    /// Build the registry of built-in audits fed by `provider`, checking the configured overrides against it
    ///
    /// # Errors
    ///
    /// Returns an error if an audit cannot be built or an override cannot be applied
    pub fn registry(&self, provider: Arc<dyn MetricProvider>) -> Result<AuditRegistry> {
        let registry = AuditRegistry::with_default_audits(provider, &self.strings)?;
        registry
            .validate_overrides(&self.config.audits)
            .into_app_err("checking calibration overrides in the configuration")?;
        Ok(registry)
    }

    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }

    /// Render audit records to the console and/or a JSON file
    ///
    /// Console output is shown when requested, or when no file report is being generated.
    ///
    /// # Errors
    ///
    /// Returns an error if a report cannot be generated or written
    pub fn report<H: Host>(&self, host: &mut H, records: &[AuditRecord], console: bool, json: Option<&Utf8PathBuf>) -> Result<()> {
        if console || json.is_none() {
            let mut console_output = String::new();
            generate_console(records, self.use_colors(), &mut console_output)?;
            let _ = write!(host.output(), "{console_output}");
        }

        if let Some(filename) = json {
            let mut json_output = String::new();
            generate_json(records, &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
            log::info!(target: LOG_TARGET, "Wrote JSON report to '{filename}'");
        }

        Ok(())
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in a process.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::TraceId;
    use crate::audits::{AuditError, AuditMeta, AuditOutcome, AuditResult};
    use crate::commands::TestHost;
    use crate::scoring::ScoringMode;

    fn common(color: ColorMode) -> Common {
        Common {
            config: Config::default(),
            strings: LocaleStrings::default(),
            color,
        }
    }

    fn record() -> AuditRecord {
        AuditRecord {
            meta: AuditMeta {
                id: "cumulative-layout-shift",
                title: "Cumulative Layout Shift".to_string(),
                description: String::new(),
                scoring_mode: ScoringMode::Numeric,
                required_artifacts: &[],
                default_calibration: None,
            },
            outcome: AuditOutcome::Scored(AuditResult::new(Some(1.0), None, 0.0, "0".to_string())),
        }
    }

    #[tokio::test]
    async fn test_unmeasured_is_not_computable() {
        let trace = Trace::new(TraceId::new("t"), Vec::new());
        let result = Unmeasured.request(&trace, &AuditContext::default()).await;
        assert!(matches!(result, ProviderResult::NotComputable(_)));
    }

    #[test]
    fn test_use_colors() {
        assert!(common(ColorMode::Always).use_colors());
        assert!(!common(ColorMode::Never).use_colors());
    }

    #[test]
    fn test_registry_rejects_bad_override() {
        let mut common = common(ColorMode::Never);
        let _ = common
            .config
            .audits
            .insert("unknown".to_string(), crate::scoring::ScoreCalibration::new(1.0, 2.0).unwrap());

        let _ = common.registry(Arc::new(Unmeasured)).unwrap_err();
    }

    #[test]
    fn test_report_defaults_to_console() {
        let mut host = TestHost::new();
        common(ColorMode::Never).report(&mut host, &[record()], false, None).unwrap();
        assert!(host.output_text().contains("(pass)"));
    }

    #[test]
    fn test_report_json_only() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("report.json")).unwrap();

        let mut host = TestHost::new();
        common(ColorMode::Never).report(&mut host, &[record()], false, Some(&path)).unwrap();

        assert!(host.output_text().is_empty());
        assert!(fs::read_to_string(&path).unwrap().contains("\"cumulative-layout-shift\""));
    }

    #[test]
    fn test_report_failed_record() {
        let failed = AuditRecord {
            outcome: AuditOutcome::Failed(AuditError::InvalidMetricValue {
                audit: "cumulative-layout-shift",
                value: -1.0,
            }),
            ..record()
        };

        let mut host = TestHost::new();
        common(ColorMode::Never).report(&mut host, &[failed], false, None).unwrap();
        assert!(host.output_text().contains("score : error"));
    }
}
